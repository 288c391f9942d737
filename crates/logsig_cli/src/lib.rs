//! Command-line front end for `logsig`.
//!
//! Each command reads log text (a file, or stdin), scans it one line at a
//! time and writes a per-line or aggregate report:
//!
//! - `scan`: the token table of every line
//! - `sig`: one signature per line
//! - `group`: line counts per signature, most frequent first

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
