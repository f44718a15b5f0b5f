use crate::error::{PipelineError, Result};
use crate::processors::LongitudeFilter;
use crate::utils::constants::{
    COMPRESSION_SNAPPY, DEFAULT_DELIMITER, DEFAULT_LONGITUDE_MAX, DEFAULT_LONGITUDE_MIN,
};
use crate::utils::coordinates::DecSignPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run settings. Every field has a default, so a config file only needs
/// the keys it changes.
///
/// ```toml
/// longitude_min = 0.0
/// longitude_max = 180.0
/// dec_sign_policy = "require-explicit"
/// delimiter = ";"
/// compression = "zstd"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub longitude_min: f64,
    pub longitude_max: f64,
    pub dec_sign_policy: DecSignPolicy,
    pub delimiter: char,
    pub compression: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            longitude_min: DEFAULT_LONGITUDE_MIN,
            longitude_max: DEFAULT_LONGITUDE_MAX,
            dec_sign_policy: DecSignPolicy::default(),
            delimiter: DEFAULT_DELIMITER,
            compression: COMPRESSION_SNAPPY.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load settings from a TOML/JSON/YAML file, format taken from the extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .build()?;
        let parsed: PipelineConfig = settings.try_deserialize()?;
        parsed.check()?;
        Ok(parsed)
    }

    /// Reject settings that would fail later in the run
    pub fn check(&self) -> Result<()> {
        self.longitude_filter()?;
        self.delimiter_byte()?;
        Ok(())
    }

    pub fn longitude_filter(&self) -> Result<LongitudeFilter> {
        LongitudeFilter::new(self.longitude_min, self.longitude_max)
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(PipelineError::Config(format!(
                "Delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }
}
