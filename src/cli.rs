//! CLI argument parsing for timecsv

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "timecsv")]
#[command(version)]
#[command(
    about = "Collect real/user timings from a `time` log into time.csv",
    long_about = None
)]
pub struct Cli {
    /// Timing log to scan (output of the shell `time` builtin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
