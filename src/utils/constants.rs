/// File names used when the CLI is run without paths
pub const DEFAULT_INPUT_FILE: &str = "Coords.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "Filtered_Galactic_Coordinates.csv";

/// Output table header
pub const HEADER_TARGET_NAME: &str = "Target Name";
pub const HEADER_GALACTIC_L: &str = "Galactic Longitude (l)";
pub const HEADER_GALACTIC_B: &str = "Galactic Latitude (b)";
pub const OUTPUT_HEADER: [&str; 3] = [HEADER_TARGET_NAME, HEADER_GALACTIC_L, HEADER_GALACTIC_B];

/// Input column positions
pub const COLUMN_TARGET_NAME: usize = 0;
pub const COLUMN_RA: usize = 1;
pub const COLUMN_DEC: usize = 2;

/// Galactic longitude selection window (open interval, degrees)
pub const DEFAULT_LONGITUDE_MIN: f64 = 0.0;
pub const DEFAULT_LONGITUDE_MAX: f64 = 180.0;

/// Sexagesimal conversion factors
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_UNIT: f64 = 60.0;
pub const SECONDS_PER_UNIT: f64 = 3600.0;
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Processing defaults
pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_ROW_GROUP_SIZE: usize = 10000;

/// Parquet compression options
pub const COMPRESSION_SNAPPY: &str = "snappy";
pub const COMPRESSION_GZIP: &str = "gzip";
pub const COMPRESSION_LZ4: &str = "lz4";
pub const COMPRESSION_ZSTD: &str = "zstd";
pub const COMPRESSION_NONE: &str = "none";
