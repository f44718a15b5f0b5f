pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::{load_config, run};
