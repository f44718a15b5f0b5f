use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Why an input row did not make it into the coordinate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingField,
    MalformedRa,
    MalformedDec,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::MissingField => "missing RA/Dec",
            SkipReason::MalformedRa => "malformed RA",
            SkipReason::MalformedDec => "malformed Dec",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based data row number (header excluded)
    pub row_number: usize,
    pub target_name: Option<String>,
    pub reason: SkipReason,
    pub details: String,
}

/// Data-quality counters produced while building the coordinate table
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    pub total_rows: usize,
    pub accepted_rows: usize,
    /// Accepted rows that replaced an earlier row with the same target name
    pub overwritten: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
    #[serde(skip)]
    pub skipped_rows: Vec<SkippedRow>,
}

impl ExtractionReport {
    pub fn record_skip(&mut self, skipped: SkippedRow) {
        *self.skipped.entry(skipped.reason).or_default() += 1;
        self.skipped_rows.push(skipped);
    }

    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Number of distinct targets left in the table
    pub fn unique_targets(&self) -> usize {
        self.accepted_rows - self.overwritten
    }

    /// Generate a summary report
    pub fn generate_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Extraction Report ===\n");
        summary.push_str(&format!("Input Rows: {}\n", self.total_rows));
        summary.push_str(&format!(
            "Accepted Rows: {} ({:.1}%)\n",
            self.accepted_rows,
            percentage(self.accepted_rows, self.total_rows)
        ));
        summary.push_str(&format!(
            "Duplicate Names Overwritten: {}\n",
            self.overwritten
        ));
        summary.push_str(&format!("Skipped Rows: {}\n", self.total_skipped()));

        for (reason, count) in &self.skipped {
            summary.push_str(&format!("  - {}: {}\n", reason, count));
        }

        if !self.skipped_rows.is_empty() {
            summary.push_str("\nFirst 10 Skipped Rows:\n");
            for (i, row) in self.skipped_rows.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. Row {} ({}): {}\n",
                    i + 1,
                    row.row_number,
                    row.target_name.as_deref().unwrap_or("<unnamed>"),
                    row.details
                ));
            }
        }

        summary
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}
