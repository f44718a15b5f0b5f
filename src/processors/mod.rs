pub mod coordinate_store;
pub mod data_quality;
pub mod galactic_transformer;
pub mod longitude_filter;

pub use coordinate_store::{CoordinateColumns, CoordinateExtractor, CoordinateTable};
pub use data_quality::{ExtractionReport, SkipReason, SkippedRow};
pub use galactic_transformer::{CoordinateTransform, GalacticTransformer, IcrsToGalactic};
pub use longitude_filter::LongitudeFilter;
