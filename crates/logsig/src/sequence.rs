//! Ordered token list for one line.

use std::fmt::Write as _;
use std::ops::Index;
use std::slice;

use crate::signature::signature;
use crate::token::Token;

/// Tokens of one log line, in input order.
///
/// A `Sequence` can be reused across lines; the scanner clears it before
/// filling it again, so the allocation is kept.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Sequence {
    tokens: Vec<Token>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Remove every token, keeping the allocation.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Token> {
        self.tokens.iter_mut()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    /// The line's signature. See [`signature`].
    pub fn signature(&self) -> String {
        signature(&self.tokens)
    }

    /// One line per token: index, kind, field, role and quoted value.
    ///
    /// ```text
    /// 0  time     unknown  none   "Jan 12 06:49:42"
    /// 1  literal  unknown  none   "irc"
    /// ```
    pub fn print_tokens(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{i:<3}{:<9}{:<10}{:<7}{:?}",
                token.kind.name(),
                token.field.name(),
                token.role.name(),
                token.value,
            );
        }
        out
    }
}

impl Index<usize> for Sequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a mut Sequence {
    type Item = &'a mut Token;
    type IntoIter = slice::IterMut<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter_mut()
    }
}

impl IntoIterator for Sequence {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl FromIterator<Token> for Sequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Sequence {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Token>> for Sequence {
    fn from(tokens: Vec<Token>) -> Self {
        Sequence { tokens }
    }
}
