//! End-to-end run: read the target table, convert, transform, select, export.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::GalacticCoordinate;
use crate::processors::{
    CoordinateExtractor, ExtractionReport, GalacticTransformer, LongitudeFilter,
};
use crate::readers::{CsvTableReader, TableSource};
use crate::utils::constants::OUTPUT_HEADER;
use crate::writers::{CsvTableWriter, OutputFormat, ParquetTableWriter, TableSink};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Exported { rows: usize },
    NothingToExport,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub extraction: ExtractionReport,
    pub transformed: usize,
    pub selected: Vec<GalacticCoordinate>,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn is_exported(&self) -> bool {
        matches!(self.outcome, RunOutcome::Exported { .. })
    }

    pub fn summary(&self) -> String {
        let mut summary = self.extraction.generate_summary();

        summary.push_str(&format!("\nTransformed Targets: {}\n", self.transformed));
        summary.push_str(&format!("Selected Targets: {}\n", self.selected.len()));

        for target in &self.selected {
            summary.push_str(&format!(
                "  {}: l = {:.6}, b = {:.6}\n",
                target.target_name, target.l_deg, target.b_deg
            ));
        }

        match self.outcome {
            RunOutcome::Exported { rows } => {
                summary.push_str(&format!("Exported {} rows\n", rows));
            }
            RunOutcome::NothingToExport => {
                summary.push_str("No filtered coordinates to export.\n");
            }
        }

        summary
    }
}

pub struct Pipeline {
    extractor: CoordinateExtractor,
    transformer: GalacticTransformer,
    filter: LongitudeFilter,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        Ok(Self {
            extractor: CoordinateExtractor::new().with_dec_sign_policy(config.dec_sign_policy),
            transformer: GalacticTransformer::new(),
            filter: config.longitude_filter()?,
        })
    }

    pub fn with_transformer(mut self, transformer: GalacticTransformer) -> Self {
        self.transformer = transformer;
        self
    }

    /// Run over an injected source and sink; the sink is only written when
    /// at least one target survives the filter.
    pub fn run(&self, source: &mut dyn TableSource, sink: &mut dyn TableSink) -> Result<RunReport> {
        let rows = source.read_rows()?;

        let (table, extraction) = self.extractor.extract(&rows);
        info!(
            "Extracted {} targets from {} rows ({} skipped)",
            table.len(),
            extraction.total_rows,
            extraction.total_skipped()
        );

        let columns = table.compute_table();
        let galactic = self.transformer.transform(&columns)?;
        let selected = self.filter.select(&galactic);

        let outcome = if selected.is_empty() {
            info!("No filtered coordinates to export");
            RunOutcome::NothingToExport
        } else {
            sink.write_table(&OUTPUT_HEADER, &selected)?;
            info!("Exported {} targets", selected.len());
            RunOutcome::Exported {
                rows: selected.len(),
            }
        };

        Ok(RunReport {
            extraction,
            transformed: galactic.len(),
            selected,
            outcome,
        })
    }
}

/// Run the pipeline from an input CSV to an output table picked by extension
pub fn run_files(input: &Path, output: &Path, config: &PipelineConfig) -> Result<RunReport> {
    let pipeline = Pipeline::new(config)?;
    let delimiter = config.delimiter_byte()?;
    let mut source = CsvTableReader::new(input).with_delimiter(delimiter);

    match OutputFormat::from_path(output)? {
        OutputFormat::Csv => {
            let mut sink = CsvTableWriter::new(output).with_delimiter(delimiter);
            pipeline.run(&mut source, &mut sink)
        }
        OutputFormat::Parquet => {
            let mut sink = ParquetTableWriter::new(output).with_compression(&config.compression)?;
            pipeline.run(&mut source, &mut sink)
        }
    }
}
