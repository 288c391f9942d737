//! Scanner errors.

use logsig_core::SourceTooLarge;
use thiserror::Error;

/// A line the scanner refused. Ordinary text never produces one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("line too long: {len} bytes (max: {limit} bytes)")]
    LineTooLong { len: usize, limit: usize },

    #[error("token boundary inside a UTF-8 codepoint at byte {offset}")]
    SplitCodepoint { offset: usize },

    #[error(transparent)]
    SourceTooLarge(#[from] SourceTooLarge),
}
