//! Run configuration
//!
//! The output table always lands in `time.csv` under the current working
//! directory; only the input log comes from the command line.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Result;
use crate::extract::{self, ExtractSummary};

/// Output file name, relative to the current working directory
pub const DEFAULT_OUTPUT: &str = "time.csv";

/// Configuration for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Timing log to read
    pub input: PathBuf,
    /// Table to (re)create
    pub output: PathBuf,
    /// Emit debug tracing
    pub debug: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            debug: false,
        }
    }
}

impl From<&Cli> for ExtractConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            debug: cli.debug,
            ..Self::default()
        }
    }
}

/// Extract the configured log into the configured table
pub fn run(config: &ExtractConfig) -> Result<ExtractSummary> {
    extract::extract_file(&config.input, &config.output)
}
