//! Scanner driver: turns one log line into a [`Sequence`].
//!
//! The driver pulls `(RawTag, len)` pairs from the allocation-free
//! [`RawScanner`], drops whitespace, and slices each token's text out of the
//! line. All scan state lives in the per-call `RawScanner`, so one
//! [`Scanner`] can be shared across threads.
//!
//! ```text
//! line → SourceBuffer → RawScanner → (RawTag, len) → Token → Sequence
//! ```

use logsig_core::{RawScanner, RawTag, SourceBuffer};

use crate::config::ScannerConfig;
use crate::convert::kind_of;
use crate::error::ScanError;
use crate::roles::assign_roles;
use crate::sequence::Sequence;
use crate::token::Token;

/// Log line tokenizer. Holds configuration only.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> Self {
        Scanner { config }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Tokenize `line` into `buf`, which is cleared first, and return it.
    pub fn tokenize(&self, line: &str, mut buf: Sequence) -> Result<Sequence, ScanError> {
        self.tokenize_into(line, &mut buf)?;
        Ok(buf)
    }

    /// Tokenize `line` into `seq`, replacing its contents.
    ///
    /// On error `seq` is left empty.
    #[tracing::instrument(level = "trace", skip_all, fields(len = line.len()))]
    pub fn tokenize_into(&self, line: &str, seq: &mut Sequence) -> Result<(), ScanError> {
        seq.clear();
        let limit = self.config.max_line_len;
        if line.len() > limit {
            tracing::debug!(len = line.len(), limit, "line rejected");
            return Err(ScanError::LineTooLong {
                len: line.len(),
                limit,
            });
        }

        let source = SourceBuffer::new(line)?;
        let mut raw = RawScanner::with_rules(source.cursor(), self.config.rules());
        let mut start = 0usize;
        let mut quoted = false;
        loop {
            let token = raw.next_token();
            if token.tag == RawTag::Eof {
                break;
            }
            let end = start + token.len as usize;
            if let Some(kind) = kind_of(token.tag) {
                let Some(value) = line.get(start..end) else {
                    seq.clear();
                    let offset = if line.is_char_boundary(start) { end } else { start };
                    return Err(ScanError::SplitCodepoint { offset });
                };
                tracing::trace!(kind = kind.name(), value, "token");
                seq.push(Token::new(kind, value));
            }
            if raw.in_quotes() && !quoted {
                tracing::debug!(offset = start, "quoted value");
            }
            quoted = raw.in_quotes();
            start = end;
        }

        if self.config.key_value_roles {
            assign_roles(seq);
        }
        Ok(())
    }
}
