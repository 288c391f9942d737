//! Raw scanner producing `(RawTag, len)` pairs for one log line.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not copy token
//! values; the caller slices them out of the line.
//!
//! # Dispatch
//!
//! At each position, after skipping whitespace, the recognizers are tried
//! in priority order: time, hex/address, numeric, URL. The first match
//! wins. If none matches, the literal/punctuation fallback takes a word
//! run or a single byte, so every call makes progress.
//!
//! A hex/colon run that breaks the address colon rule is remembered: the
//! address recognizer is not tried again until the cursor leaves that run.
//!
//! # Quoted values
//!
//! `key="a b c"` and `'quoted text'` carry one value with embedded spaces.
//! When the opening quote qualifies (a `"` right after `=`, or a `'` that
//! does not follow a word byte) and is closed later on the line, the
//! scanner emits the quote, then the whole content as one token, then the
//! closing quote.

use std::borrow::Cow;

use crate::class;
use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};
use crate::time::{self, TimeGrammar, BUILTIN_GRAMMARS};
use crate::url::{self, DEFAULT_URL_SCHEMES};
use crate::hex::{self, AddressScan};
use crate::numeric;

/// Caller-tunable recognizer inputs.
#[derive(Clone, Copy, Debug)]
pub struct ScanRules<'r> {
    /// Timestamp grammars, tried in order.
    pub time_grammars: &'r [TimeGrammar],
    /// URL scheme prefixes such as `https://`.
    pub url_schemes: &'r [Cow<'static, str>],
}

impl ScanRules<'static> {
    /// Built-in grammars and schemes.
    pub const DEFAULT: Self = Self {
        time_grammars: &BUILTIN_GRAMMARS,
        url_schemes: DEFAULT_URL_SCHEMES,
    };
}

impl Default for ScanRules<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScanRules<'_> {
    /// Run the structured recognizers in priority order against the start
    /// of `s`.
    pub fn recognize(&self, s: &[u8]) -> Option<(RawTag, usize)> {
        self.time(s)
            .or_else(|| hex::scan_address(s))
            .or_else(|| self.number_or_url(s))
    }

    fn time(&self, s: &[u8]) -> Option<(RawTag, usize)> {
        time::scan_time(s, self.time_grammars).map(|len| (RawTag::Time, len))
    }

    fn number_or_url(&self, s: &[u8]) -> Option<(RawTag, usize)> {
        numeric::scan_numeric(s)
            .or_else(|| url::scan_url(s, self.url_schemes).map(|len| (RawTag::Url, len)))
    }
}

/// Allocation-free scanner over one line.
///
/// Produces one token at a time as a `(tag, length)` pair. Ordinary text
/// never fails to scan: every byte ends up in exactly one token.
pub struct RawScanner<'a, 'r> {
    cursor: Cursor<'a>,
    rules: ScanRules<'r>,
    /// The last non-trivia token was a lone `=`.
    after_equals: bool,
    /// Position of the closing quote while a quoted value is open.
    quote_close: Option<u32>,
    /// End of the last hex/colon run that broke the colon rule. The
    /// address recognizer stays off until the cursor passes it.
    broken_run_end: u32,
}

impl<'a> RawScanner<'a, 'static> {
    /// Create a scanner with the built-in rules.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_rules(cursor, ScanRules::DEFAULT)
    }
}

impl<'a, 'r> RawScanner<'a, 'r> {
    pub fn with_rules(cursor: Cursor<'a>, rules: ScanRules<'r>) -> Self {
        Self {
            cursor,
            rules,
            after_equals: false,
            quote_close: None,
            broken_run_end: 0,
        }
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Whether a quoted value is open: the next token is its content or
    /// its closing quote.
    #[inline]
    pub fn in_quotes(&self) -> bool {
        self.quote_close.is_some()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the line is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if let Some(close) = self.quote_close {
            return self.inside_quotes(start, close);
        }

        let b = self.cursor.current();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        if class::is_space(b) {
            self.cursor.eat_whitespace();
            return self.token(start, RawTag::Whitespace);
        }

        let token = match self.structured(start) {
            Some(token) => token,
            None => self.literal_or_punct(start, b),
        };
        self.after_equals = token.tag == RawTag::Punct && b == b'=';
        token
    }

    // ─── Structured tokens ──────────────────────────────────────────

    fn structured(&mut self, start: u32) -> Option<RawToken> {
        let rest = self.cursor.rest();
        let (tag, len) = match self.rules.time(rest) {
            Some(found) => found,
            None => self
                .address(start, rest)
                .or_else(|| self.rules.number_or_url(rest))?,
        };
        let len = u32::try_from(len).ok()?;
        self.cursor.advance_n(len);
        Some(self.token(start, tag))
    }

    /// The address recognizer, unless `start` lies inside a run it already
    /// rejected (`:::00` must not yield `::00` one byte later).
    fn address(&mut self, start: u32, rest: &[u8]) -> Option<(RawTag, usize)> {
        if start < self.broken_run_end {
            return None;
        }
        match hex::examine_address(rest) {
            AddressScan::Claimed(tag, len) => Some((tag, len)),
            AddressScan::Broken(run) => {
                let run = u32::try_from(run).unwrap_or(u32::MAX);
                self.broken_run_end = start.saturating_add(run);
                None
            }
            AddressScan::Unclaimed => None,
        }
    }

    // ─── Literal / punctuation fallback ─────────────────────────────

    fn literal_or_punct(&mut self, start: u32, b: u8) -> RawToken {
        match b {
            b'"' | b'\'' => self.open_quote(start, b),
            b'-' => self.single(start),
            b'/' if !starts_path(self.cursor.peek()) => self.single(start),
            b'.' if !class::is_alnum(self.cursor.peek()) => self.single(start),
            _ if class::is_punct(b) => self.single(start),
            _ if class::is_word(b) => {
                self.cursor.advance_char();
                self.cursor.eat_while(class::is_word);
                self.token(start, RawTag::Literal)
            }
            // Interior NUL: belongs to no class.
            _ => {
                self.cursor.advance();
                self.token(start, RawTag::Literal)
            }
        }
    }

    /// Emit an opening quote, entering quoted-value mode when it qualifies:
    /// a `"` right after a `=` token, or a `'` not glued to a word (so the
    /// apostrophe in `don't` stays plain punctuation). Either way the quote
    /// must be closed later on the line.
    fn open_quote(&mut self, start: u32, quote: u8) -> RawToken {
        let qualifies = match quote {
            b'"' => self.after_equals,
            _ => !class::is_word(self.cursor.prev()),
        };
        if qualifies {
            self.quote_close = self.cursor.closing_quote();
        }
        self.single(start)
    }

    /// Inside quoted-value mode: the content as one token, then the
    /// closing quote.
    fn inside_quotes(&mut self, start: u32, close: u32) -> RawToken {
        self.after_equals = false;
        if start >= close {
            self.quote_close = None;
            return self.single(start);
        }
        let content = self.cursor.bytes(start, close);
        let tag = match self.rules.recognize(content) {
            Some((tag, len)) if len == content.len() => tag,
            _ => RawTag::Literal,
        };
        self.cursor.advance_n(close - start);
        self.token(start, tag)
    }

    // ─── Helpers ────────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Punct)
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

/// A `/` followed by this byte starts a path word (`/var/log`, `/~user`).
fn starts_path(next: u8) -> bool {
    next.is_ascii_alphabetic() || matches!(next, b'_' | b'.' | b'~' | b'/')
}
