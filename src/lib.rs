pub mod cli;
pub mod config;
pub mod error;
pub mod frames;
pub mod models;
pub mod pipeline;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use crate::config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{run_files, Pipeline, RunOutcome, RunReport};
