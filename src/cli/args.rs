use crate::utils::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "galactic-filter")]
#[command(about = "Convert sexagesimal target positions to galactic coordinates and keep 0 < l < 180")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input CSV table (name, RA, Dec)")]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output table (.csv or .parquet)"
    )]
    pub output: PathBuf,

    #[arg(short, long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Reject declinations without an explicit +/- sign")]
    pub require_dec_sign: bool,

    #[arg(long, help = "Print the run report as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
