use crate::models::{EquatorialCoordinate, RawRow};
use crate::processors::data_quality::{ExtractionReport, SkipReason, SkippedRow};
use crate::utils::coordinates::{normalize_ra_deg, parse_dec_with_policy, parse_ra, DecSignPolicy};
use std::collections::HashMap;
use tracing::debug;

/// Equatorial coordinates keyed by target name, in order of first appearance.
///
/// Inserting a name that is already present replaces its coordinates but
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTable {
    index: HashMap<String, usize>,
    entries: Vec<EquatorialCoordinate>,
}

/// Parallel RA/Dec/name columns derived from a [`CoordinateTable`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateColumns {
    pub ra_deg: Vec<f64>,
    pub dec_deg: Vec<f64>,
    pub target_names: Vec<String>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a coordinate. Returns `true` when an earlier entry was replaced.
    pub fn insert(&mut self, coordinate: EquatorialCoordinate) -> bool {
        match self.index.get(&coordinate.target_name) {
            Some(&position) => {
                self.entries[position] = coordinate;
                true
            }
            None => {
                self.index
                    .insert(coordinate.target_name.clone(), self.entries.len());
                self.entries.push(coordinate);
                false
            }
        }
    }

    pub fn get(&self, target_name: &str) -> Option<&EquatorialCoordinate> {
        self.index.get(target_name).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquatorialCoordinate> {
        self.entries.iter()
    }

    /// Split the table into parallel RA, Dec and name sequences
    pub fn compute_table(&self) -> CoordinateColumns {
        let mut columns = CoordinateColumns {
            ra_deg: Vec::with_capacity(self.len()),
            dec_deg: Vec::with_capacity(self.len()),
            target_names: Vec::with_capacity(self.len()),
        };

        for entry in &self.entries {
            columns.ra_deg.push(entry.ra_deg);
            columns.dec_deg.push(entry.dec_deg);
            columns.target_names.push(entry.target_name.clone());
        }

        columns
    }
}

/// Turns raw table rows into a [`CoordinateTable`], dropping rows that
/// cannot be parsed.
pub struct CoordinateExtractor {
    dec_sign_policy: DecSignPolicy,
}

impl CoordinateExtractor {
    pub fn new() -> Self {
        Self {
            dec_sign_policy: DecSignPolicy::default(),
        }
    }

    pub fn with_dec_sign_policy(mut self, policy: DecSignPolicy) -> Self {
        self.dec_sign_policy = policy;
        self
    }

    /// Parse every row; skipped rows are counted in the report, never returned as errors
    pub fn extract(&self, rows: &[RawRow]) -> (CoordinateTable, ExtractionReport) {
        let mut table = CoordinateTable::new();
        let mut report = ExtractionReport {
            total_rows: rows.len(),
            ..Default::default()
        };

        for (i, row) in rows.iter().enumerate() {
            match self.parse_row(row) {
                Ok(coordinate) => {
                    report.accepted_rows += 1;
                    if table.insert(coordinate) {
                        report.overwritten += 1;
                    }
                }
                Err((reason, details)) => {
                    debug!(row = i + 1, %reason, "skipping row: {}", details);
                    report.record_skip(SkippedRow {
                        row_number: i + 1,
                        target_name: row.target_name.clone(),
                        reason,
                        details,
                    });
                }
            }
        }

        (table, report)
    }

    fn parse_row(
        &self,
        row: &RawRow,
    ) -> std::result::Result<EquatorialCoordinate, (SkipReason, String)> {
        let (ra_text, dec_text) = match (&row.ra_text, &row.dec_text) {
            (Some(ra), Some(dec)) if !ra.trim().is_empty() && !dec.trim().is_empty() => (ra, dec),
            _ => {
                return Err((
                    SkipReason::MissingField,
                    "RA or Dec cell is empty".to_string(),
                ))
            }
        };

        let ra_deg = parse_ra(ra_text).map_err(|e| (SkipReason::MalformedRa, e.to_string()))?;
        let dec_deg = parse_dec_with_policy(dec_text, self.dec_sign_policy)
            .map_err(|e| (SkipReason::MalformedDec, e.to_string()))?;

        // Dec outside [-90, 90] is left for the transform to reject
        Ok(EquatorialCoordinate::new(
            row.target_name.clone().unwrap_or_default(),
            normalize_ra_deg(ra_deg),
            dec_deg,
        ))
    }
}

impl Default for CoordinateExtractor {
    fn default() -> Self {
        Self::new()
    }
}
