//! timecsv - turn `time` output logs into a `real,user` CSV table
//!
//! This library provides the pieces behind the `timecsv` binary: line
//! classification, the real/user pairing writer, and the file-level
//! extraction entry points.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;

pub use config::{run, ExtractConfig, DEFAULT_OUTPUT};
pub use error::{ExtractError, Result};
pub use extract::{
    extract_file, extract_str, parse_line, ExtractSummary, PairWriter, TimingField, TimingLine,
    CSV_HEADER,
};
