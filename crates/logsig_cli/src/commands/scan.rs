//! `scan` and `sig`: one report per input line.

use std::io::{self, Write};

use super::{render_lines, report_failures, RunConfig};

/// Print the token table of every line, separated by blank lines.
pub fn run_scan(
    text: &str,
    config: &RunConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let results = render_lines(text, config, logsig::Sequence::print_tokens);
    for table in results.iter().flatten() {
        writeln!(out, "{table}")?;
    }
    report_failures(&results, err)
}

/// Print one signature per line. Lines that fail to scan print nothing.
pub fn run_sig(
    text: &str,
    config: &RunConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    let results = render_lines(text, config, logsig::Sequence::signature);
    for signature in results.iter().flatten() {
        writeln!(out, "{signature}")?;
    }
    report_failures(&results, err)
}

#[cfg(test)]
mod tests;
