//! Key/value role tagging.
//!
//! A pass over a finished [`Sequence`] that marks `key=value` and
//! `key: value` pairs. A key is a word literal; it must be followed by a
//! lone `=` or `:` literal and then by a token that is not standalone
//! punctuation. A quoted value (`key="a b"`) is looked through: the value
//! is the token between the quotes.

use logsig_core::class;

use crate::sequence::Sequence;
use crate::token::{Role, Token, TokenKind};

/// Mark key and value tokens in `seq`. Tokens outside a pair keep their
/// current role.
pub fn assign_roles(seq: &mut Sequence) {
    let mut i = 0;
    while i + 2 < seq.len() {
        match value_index(seq, i) {
            Some(value) => {
                if let Some(key) = seq.get_mut(i) {
                    key.role = Role::Key;
                }
                if let Some(value) = seq.get_mut(value) {
                    value.role = Role::Value;
                }
                tracing::trace!(key = i, value, "key/value pair");
                i = value + 1;
            }
            None => i += 1,
        }
    }
}

/// Index of the value token when a pair starts at `i`.
fn value_index(seq: &Sequence, i: usize) -> Option<usize> {
    let tokens = seq.as_slice();
    let key = tokens.get(i)?;
    let sep = tokens.get(i + 1)?;
    if !is_word(key) || !(sep.is_literal("=") || sep.is_literal(":")) {
        return None;
    }
    let next = tokens.get(i + 2)?;
    if !is_punct(next) {
        return Some(i + 2);
    }
    // key="quoted value"
    let quote = next.value.as_str();
    let inner = tokens.get(i + 3)?;
    let close = tokens.get(i + 4)?;
    (matches!(quote, "\"" | "'") && !is_punct(inner) && close.is_literal(quote)).then_some(i + 3)
}

fn is_word(token: &Token) -> bool {
    token.kind == TokenKind::Literal && token.value.chars().any(char::is_alphanumeric)
}

/// A single standalone punctuation byte: quote, bracket, `=`, `,`, `;`, `:`.
fn is_punct(token: &Token) -> bool {
    token.kind == TokenKind::Literal
        && matches!(token.value.as_bytes(), &[b] if class::is_punct(b))
}
