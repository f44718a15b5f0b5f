use crate::cli::args::Cli;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::{run_files, RunOutcome};
use crate::utils::coordinates::DecSignPolicy;
use crate::writers::{OutputFormat, ParquetTableWriter};
use tracing::debug;

/// Resolve configuration from the CLI flags and optional config file
pub fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    if cli.require_dec_sign {
        config.dec_sign_policy = DecSignPolicy::RequireExplicit;
    }

    debug!(?config, "Resolved configuration");
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let report = run_files(&cli.input, &cli.output, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", report.summary());

    match report.outcome {
        RunOutcome::Exported { rows } => {
            println!("Wrote {} targets to {}", rows, cli.output.display());
            if OutputFormat::from_path(&cli.output)? == OutputFormat::Parquet {
                let info = ParquetTableWriter::new(&cli.output)
                    .with_compression(&config.compression)?
                    .get_file_info()?;
                println!("{}", info.summary());
            }
        }
        RunOutcome::NothingToExport => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_output_table() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let input = temp_dir.path().join("Coords.csv");
        let output = temp_dir.path().join("out.csv");
        fs::write(
            &input,
            "Target Name,RA,Dec\nVega,18 36 56.336,+38 47 1.28\nCrab,5 34 31.94,+22 0 52.2\n",
        )?;

        let cli = Cli::parse_from([
            "galactic-filter",
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--json",
        ]);
        run(cli)?;

        let written = fs::read_to_string(&output)?;
        assert!(written.contains("Vega"));
        assert!(!written.contains("Crab"));
        Ok(())
    }

    #[test]
    fn test_require_dec_sign_flag_overrides_config() -> Result<()> {
        let cli = Cli::parse_from(["galactic-filter", "--require-dec-sign"]);
        let config = load_config(&cli)?;
        assert_eq!(config.dec_sign_policy, DecSignPolicy::RequireExplicit);
        Ok(())
    }
}
