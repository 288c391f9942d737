//! Log line tokenizer and signature renderer.
//!
//! [`Scanner::tokenize`] splits one line of free-form log text into a
//! [`Sequence`] of typed [`Token`]s: timestamps, integers, floats, IPv4 and
//! IPv6 addresses, MAC addresses, URLs, and literal words or punctuation.
//! [`Sequence::signature`] collapses the variable parts into placeholders so
//! lines produced by the same format string share one signature:
//!
//! ```
//! use logsig::{Scanner, Sequence};
//!
//! let scanner = Scanner::default();
//! let line = "Jan 12 06:49:42 irc sshd[7034]: Failed password for root from 218.161.81.238 port 4228 ssh2";
//! let seq = scanner.tokenize(line, Sequence::new()).unwrap();
//! assert_eq!(seq.signature(), "%time%[%integer%]:%ipv4%%integer%");
//! ```
//!
//! The byte-level work happens in [`logsig_core`]; this crate owns the
//! token model, configuration, errors and the optional key/value pass.

mod config;
mod convert;
mod error;
mod roles;
mod scanner;
mod sequence;
mod signature;
mod token;

pub use config::ScannerConfig;
pub use error::ScanError;
pub use roles::assign_roles;
pub use scanner::Scanner;
pub use sequence::Sequence;
pub use signature::signature;
pub use token::{Field, Role, Token, TokenKind};

pub use logsig_core;
