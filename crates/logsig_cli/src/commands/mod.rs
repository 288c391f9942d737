//! Command handlers for the `logsig` CLI.
//!
//! Option parsing, input reading and the line-scanning loop shared by every
//! command live here; each submodule renders one kind of report.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};

use logsig::{ScanError, Scanner, ScannerConfig, Sequence};
use rayon::prelude::*;

mod group;
mod scan;

pub use group::{group_signatures, run_group, SignatureCount};
pub use scan::{run_scan, run_sig};

/// Settings for one CLI run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub scanner: ScannerConfig,
    /// Scan lines on the rayon pool.
    pub parallel: bool,
    /// `group`: print only the `top` most frequent signatures.
    pub top: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            scanner: ScannerConfig::default(),
            parallel: true,
            top: None,
        }
    }
}

/// A command-line argument that could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption(String),
    InvalidValue { option: &'static str, value: String },
    ExtraArgument(String),
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption(arg) => write!(f, "unknown option: {arg}"),
            OptionError::InvalidValue { option, value } => {
                write!(f, "invalid value for {option}: {value:?}")
            }
            OptionError::ExtraArgument(arg) => write!(f, "unexpected argument: {arg}"),
        }
    }
}

impl std::error::Error for OptionError {}

/// Parse the options that follow a command name.
///
/// Returns the run settings and the input path; `None` (or `-`) means
/// stdin.
pub fn parse_options(args: &[String]) -> Result<(RunConfig, Option<String>), OptionError> {
    let mut config = RunConfig::default();
    let mut path = None;

    for arg in args {
        if arg == "--kv" {
            config.scanner.key_value_roles = true;
        } else if arg == "--no-parallel" {
            config.parallel = false;
        } else if let Some(value) = arg.strip_prefix("--max-line=") {
            config.scanner.max_line_len = parse_count("--max-line", value)?;
        } else if let Some(value) = arg.strip_prefix("--top=") {
            config.top = Some(parse_count("--top", value)?);
        } else if arg.starts_with("--") {
            return Err(OptionError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(OptionError::ExtraArgument(arg.clone()));
        }
    }

    if path.as_deref() == Some("-") {
        path = None;
    }
    Ok((config, path))
}

fn parse_count(option: &'static str, value: &str) -> Result<usize, OptionError> {
    value.parse().map_err(|_| OptionError::InvalidValue {
        option,
        value: value.to_string(),
    })
}

/// Read the whole input: the file at `path`, or stdin.
///
/// Invalid UTF-8 is replaced with U+FFFD, so a line with a stray byte is
/// still scanned and the lines around it are unaffected.
pub fn read_input(path: Option<&str>) -> io::Result<String> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            io::stdin().lock().read_to_end(&mut bytes)?;
            bytes
        }
    };
    Ok(decode_lossy(bytes))
}

fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(
                offset = e.utf8_error().valid_up_to(),
                "input is not valid UTF-8, replacing invalid bytes"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Scan every line of `text` and render each one with `render`.
///
/// Results are in line order. In parallel mode each rayon worker reuses its
/// own `Sequence`.
pub(crate) fn render_lines<F>(
    text: &str,
    config: &RunConfig,
    render: F,
) -> Vec<Result<String, ScanError>>
where
    F: Fn(&Sequence) -> String + Sync + Send,
{
    let scanner = Scanner::new(config.scanner.clone());
    let lines: Vec<&str> = text.lines().collect();
    tracing::debug!(
        lines = lines.len(),
        parallel = config.parallel,
        key_value_roles = scanner.config().key_value_roles,
        max_line_len = scanner.config().max_line_len,
        "scanning"
    );

    let render_one = |seq: &mut Sequence, line: &str| -> Result<String, ScanError> {
        scanner.tokenize_into(line, seq)?;
        Ok(render(seq))
    };
    if config.parallel {
        lines
            .par_iter()
            .map_init(Sequence::new, |seq, line| render_one(seq, line))
            .collect()
    } else {
        let mut seq = Sequence::new();
        lines
            .iter()
            .map(|line| render_one(&mut seq, line))
            .collect()
    }
}

/// Report scan failures on `err` as `line N: message`, 1-based.
///
/// Returns `true` when every line scanned.
pub(crate) fn report_failures<T>(
    results: &[Result<T, ScanError>],
    err: &mut impl Write,
) -> io::Result<bool> {
    let mut ok = true;
    for (i, result) in results.iter().enumerate() {
        if let Err(e) = result {
            tracing::warn!(line = i + 1, error = %e, "line skipped");
            writeln!(err, "line {}: {e}", i + 1)?;
            ok = false;
        }
    }
    Ok(ok)
}

#[cfg(test)]
mod tests;
