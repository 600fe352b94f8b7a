//! Timing log extraction
//!
//! Scans the output of a command-timing utility (e.g. the shell `time`
//! builtin) and pairs each `real` duration with the `user` duration that
//! follows it:
//!
//! ```text
//! real    0m1.234s          real,user
//! user    0m0.987s    =>    0m1.234s,0m0.987s
//! sys     0m0.012s
//! ```
//!
//! `sys` lines and anything else are skipped.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Header row of the output table
pub const CSV_HEADER: &str = "real,user";

/// Timing line kinds that make it into the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingField {
    /// Wall-clock time
    Real,
    /// CPU time spent in user mode
    User,
}

impl TimingField {
    /// Literal prefix that marks a line of this kind
    pub fn prefix(self) -> &'static str {
        match self {
            TimingField::Real => "real",
            TimingField::User => "user",
        }
    }

    /// Classify a raw log line by its prefix after trimming.
    ///
    /// This is a plain string prefix test, so `realtime 3` counts as a
    /// `real` line.
    pub fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        [TimingField::Real, TimingField::User]
            .into_iter()
            .find(|field| trimmed.starts_with(field.prefix()))
    }
}

impl fmt::Display for TimingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A recognized `real`/`user` line with its value token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingLine<'a> {
    pub field: TimingField,
    pub value: &'a str,
}

/// Parse one log line.
///
/// Returns `Ok(None)` for lines that are neither `real` nor `user`. A
/// recognized line must carry a second whitespace-separated token, which
/// becomes the value; anything after it is ignored.
pub fn parse_line<'a>(
    source: &Path,
    line_no: usize,
    line: &'a str,
) -> Result<Option<TimingLine<'a>>> {
    let Some(field) = TimingField::classify(line) else {
        return Ok(None);
    };

    match line.split_whitespace().nth(1) {
        Some(value) => Ok(Some(TimingLine { field, value })),
        None => Err(ExtractError::MalformedLine {
            path: source.to_path_buf(),
            line_no,
            field,
            line: line.to_string(),
        }),
    }
}

/// Counters collected over one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    /// Input lines scanned
    pub lines: usize,
    /// Complete `real,user` rows written
    pub rows: usize,
    /// `real` values replaced by a later `real` before any `user`
    pub overwritten_real: usize,
    /// `user` values seen with no `real` pending
    pub orphan_user: usize,
    /// Whether the output ends with a `real` value and no `user`
    pub dangling_real: bool,
}

#[derive(Debug)]
enum PairState {
    AwaitingReal,
    AwaitingUser { real: String },
}

/// Writes `real,user` rows as timing lines arrive.
///
/// A `real` value is held until the next `user` value completes the row.
/// A second `real` replaces the held one. A `user` with nothing held is
/// dropped. Whatever is still held at [`finish`](Self::finish) is written
/// as `value,` with no newline.
#[derive(Debug)]
pub struct PairWriter<W: Write> {
    out: W,
    path: PathBuf,
    state: PairState,
    summary: ExtractSummary,
}

impl PairWriter<BufWriter<File>> {
    /// Create (or truncate) the output file and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ExtractError::Output {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufWriter::new(file), path)
    }
}

impl<W: Write> PairWriter<W> {
    /// Wrap a writer and emit the header row. `path` is only used in errors.
    pub fn new(mut out: W, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        writeln!(out, "{}", CSV_HEADER).map_err(|source| ExtractError::Output {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            out,
            path,
            state: PairState::AwaitingReal,
            summary: ExtractSummary::default(),
        })
    }

    /// Feed one recognized line through the pairing state machine
    pub fn push(&mut self, line: TimingLine<'_>) -> Result<()> {
        let state = std::mem::replace(&mut self.state, PairState::AwaitingReal);

        self.state = match (state, line.field) {
            (PairState::AwaitingReal, TimingField::Real) => PairState::AwaitingUser {
                real: line.value.to_string(),
            },
            (PairState::AwaitingUser { real }, TimingField::Real) => {
                tracing::warn!(
                    "real value {} replaced by {} before any user value",
                    real,
                    line.value
                );
                self.summary.overwritten_real += 1;
                PairState::AwaitingUser {
                    real: line.value.to_string(),
                }
            }
            (PairState::AwaitingUser { real }, TimingField::User) => {
                self.write_row(&real, line.value)?;
                PairState::AwaitingReal
            }
            (PairState::AwaitingReal, TimingField::User) => {
                tracing::warn!(
                    "user value {} has no preceding real value, skipped",
                    line.value
                );
                self.summary.orphan_user += 1;
                PairState::AwaitingReal
            }
        };

        Ok(())
    }

    fn write_row(&mut self, real: &str, user: &str) -> Result<()> {
        writeln!(self.out, "{},{}", real, user).map_err(|source| self.output_error(source))?;
        self.summary.rows += 1;
        Ok(())
    }

    fn output_error(&self, source: std::io::Error) -> ExtractError {
        ExtractError::Output {
            path: self.path.clone(),
            source,
        }
    }

    /// Write any held `real` value, flush, and return the writer with the
    /// pass counters
    pub fn finish(mut self) -> Result<(W, ExtractSummary)> {
        let state = std::mem::replace(&mut self.state, PairState::AwaitingReal);
        if let PairState::AwaitingUser { real } = state {
            tracing::warn!("trailing real value {} has no user value", real);
            write!(self.out, "{},", real).map_err(|source| self.output_error(source))?;
            self.summary.dangling_real = true;
        }

        self.out.flush().map_err(|source| self.output_error(source))?;
        Ok((self.out, self.summary))
    }
}

/// Run the extraction pass over in-memory log text.
///
/// `source` names the log in error messages. Line numbers are 1-based.
pub fn extract_str<W: Write>(
    source: &Path,
    text: &str,
    mut writer: PairWriter<W>,
) -> Result<(W, ExtractSummary)> {
    let mut lines = 0;

    for (idx, line) in text.lines().enumerate() {
        lines += 1;
        if let Some(timing) = parse_line(source, idx + 1, line)? {
            tracing::debug!(
                "{}:{}: {} = {}",
                source.display(),
                idx + 1,
                timing.field,
                timing.value
            );
            writer.push(timing)?;
        }
    }

    let (out, mut summary) = writer.finish()?;
    summary.lines = lines;
    Ok((out, summary))
}

/// Read `input` whole and write its timing table to `output`.
///
/// The input is read before the output is touched, so a missing log leaves
/// an existing table alone. The output is truncated on every run.
pub fn extract_file(input: &Path, output: &Path) -> Result<ExtractSummary> {
    let text = fs::read_to_string(input).map_err(|source| ExtractError::MissingInput {
        path: input.to_path_buf(),
        source,
    })?;

    let writer = PairWriter::create(output)?;
    let (_, summary) = extract_str(input, &text, writer)?;

    tracing::info!(
        "{} -> {}: {} lines, {} rows",
        input.display(),
        output.display(),
        summary.lines,
        summary.rows
    );
    Ok(summary)
}
