pub mod csv_writer;
pub mod parquet_writer;

pub use csv_writer::CsvTableWriter;
pub use parquet_writer::{ParquetFileInfo, ParquetTableWriter};

use crate::error::{PipelineError, Result};
use crate::models::GalacticCoordinate;
use std::path::Path;

/// Destination for the filtered galactic table.
///
/// `write_table` is only called when there is at least one row to export.
pub trait TableSink {
    fn write_table(&mut self, header: &[&str], rows: &[GalacticCoordinate]) -> Result<()>;
}

/// Output formats chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") | Some("txt") => Ok(OutputFormat::Csv),
            Some("parquet") => Ok(OutputFormat::Parquet),
            _ => Err(PipelineError::UnsupportedFormat(format!(
                "cannot infer output format from '{}' (expected .csv or .parquet)",
                path.display()
            ))),
        }
    }
}

/// Collects written rows in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub header: Vec<String>,
    pub rows: Vec<GalacticCoordinate>,
    pub writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TableSink for MemorySink {
    fn write_table(&mut self, header: &[&str], rows: &[GalacticCoordinate]) -> Result<()> {
        self.header = header.iter().map(|h| h.to_string()).collect();
        self.rows = rows.to_vec();
        self.writes += 1;
        Ok(())
    }
}
