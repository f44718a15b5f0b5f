use crate::error::Result;
use crate::models::RawRow;
use crate::utils::constants::{COLUMN_DEC, COLUMN_RA, COLUMN_TARGET_NAME, DEFAULT_DELIMITER};
use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of raw target rows (header already removed).
pub trait TableSource {
    fn read_rows(&mut self) -> Result<Vec<RawRow>>;
}

/// Reads target rows from a delimited text file.
///
/// The first line is a header. Columns are taken by position: target name,
/// RA, Dec. Extra columns are ignored and short rows are padded with empty
/// cells.
pub struct CsvTableReader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvTableReader {
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

    /// Parse already-decoded table text
    fn parse_text(&self, text: &str) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |index: usize| record.get(index).unwrap_or("");
            rows.push(RawRow::from_cells(
                cell(COLUMN_TARGET_NAME),
                cell(COLUMN_RA),
                cell(COLUMN_DEC),
            ));
        }

        Ok(rows)
    }
}

impl TableSource for CsvTableReader {
    fn read_rows(&mut self) -> Result<Vec<RawRow>> {
        let bytes = std::fs::read(&self.path)?;
        let text = decode_table_bytes(&bytes);
        let rows = self.parse_text(&text)?;
        debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

/// Decode UTF-8 (BOM stripped), falling back to Windows-1252 for
/// spreadsheet exports that are not valid UTF-8.
pub fn decode_table_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _, had_errors) = UTF_8.decode(bytes);
    if !had_errors {
        return text;
    }

    warn!("Input is not valid UTF-8, decoding as Windows-1252");
    let (text, _, _) = WINDOWS_1252.decode(bytes);
    text
}

/// In-memory table, mainly for driving the pipeline without files.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    rows: Vec<RawRow>,
}

impl MemoryTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    /// Build from `(name, ra, dec)` cell text
    pub fn from_cells(cells: &[(&str, &str, &str)]) -> Self {
        Self::new(
            cells
                .iter()
                .map(|(name, ra, dec)| RawRow::from_cells(name, ra, dec))
                .collect(),
        )
    }
}

impl TableSource for MemoryTable {
    fn read_rows(&mut self) -> Result<Vec<RawRow>> {
        Ok(self.rows.clone())
    }
}
