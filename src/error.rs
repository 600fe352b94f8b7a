//! Error types for timing log extraction

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::extract::TimingField;

/// Errors raised while turning a timing log into `time.csv`
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("cannot read timing log {}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "{}:{line_no}: `{field}` line has no value (expected `{field} <value>`): {line:?}",
        .path.display()
    )]
    MalformedLine {
        path: PathBuf,
        line_no: usize,
        field: TimingField,
        line: String,
    },

    #[error("cannot write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
