//! Signature rendering.
//!
//! A signature keeps the shape of a line and drops its variable parts:
//! structured tokens become `%kind%` placeholders, punctuation is kept,
//! and words are dropped. Two lines from the same log statement usually
//! share a signature.

use crate::token::{Token, TokenKind};

/// Render the signature of a token slice.
///
/// Depends only on each token's kind and value; `field` and `role` are
/// ignored.
pub fn signature(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if let Some(placeholder) = token.kind.placeholder() {
            out.push_str(placeholder);
        } else if keeps_text(token) {
            out.push_str(&token.value);
        }
    }
    out
}

/// A literal shows up in the signature if it is a single character or
/// has no letters or digits at all (`-`, `:`, `***`, `<>`).
fn keeps_text(token: &Token) -> bool {
    debug_assert_eq!(token.kind, TokenKind::Literal);
    token.is_single_char() || !token.value.chars().any(char::is_alphanumeric)
}
