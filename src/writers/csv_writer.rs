use crate::error::Result;
use crate::models::GalacticCoordinate;
use crate::utils::constants::DEFAULT_DELIMITER;
use crate::writers::TableSink;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes the galactic table as delimited text.
pub struct CsvTableWriter {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: DEFAULT_DELIMITER as u8,
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableSink for CsvTableWriter {
    fn write_table(&mut self, header: &[&str], rows: &[GalacticCoordinate]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(file);

        writer.write_record(header)?;
        for row in rows {
            writer.write_record([
                row.target_name.clone(),
                row.l_deg.to_string(),
                row.b_deg.to_string(),
            ])?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::OUTPUT_HEADER;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_write_table() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("out.csv");

        let rows = vec![
            GalacticCoordinate::new("Vega".to_string(), 67.5, 19.25),
            GalacticCoordinate::new("Name, with comma".to_string(), 121.0, -21.5),
        ];
        CsvTableWriter::new(&path).write_table(&OUTPUT_HEADER, &rows)?;

        let written = std::fs::read_to_string(&path)?;
        assert_eq!(
            written,
            "Target Name,Galactic Longitude (l),Galactic Latitude (b)\n\
             Vega,67.5,19.25\n\
             \"Name, with comma\",121,-21.5\n"
        );
        Ok(())
    }

    #[test]
    fn test_unwritable_path() {
        let rows = vec![GalacticCoordinate::new("x".to_string(), 1.0, 1.0)];
        let result = CsvTableWriter::new("/nonexistent-dir/out.csv").write_table(&OUTPUT_HEADER, &rows);
        assert!(result.is_err());
    }
}
