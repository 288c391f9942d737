//! Byte classification for log-line scanning.
//!
//! Every byte value maps to a precomputed [`ByteClass`] set, built at
//! compile time. The classes decide where tokens start and stop:
//!
//! - **space**: separates tokens and is never stored.
//! - **punct**: always a token of its own (`" ' ( ) [ ] { } < > = , ; :`).
//! - **word**: may appear inside a literal word run (letters, digits,
//!   non-ASCII bytes and connectors such as `. - _ / @ $ % *`).
//!
//! `0x00` belongs to no class, so it terminates every `eat_while` loop at
//! the sentinel.

use bitflags::bitflags;

bitflags! {
    /// Precomputed properties of a single byte.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ByteClass: u8 {
        /// ASCII whitespace: space, tab, CR, LF, VT, FF.
        const SPACE = 1 << 0;
        /// Decimal digit.
        const DIGIT = 1 << 1;
        /// Hexadecimal digit (either case).
        const HEX = 1 << 2;
        /// ASCII letter.
        const ALPHA = 1 << 3;
        /// Standalone punctuation, always emitted as a one-byte token.
        const PUNCT = 1 << 4;
        /// Byte that can continue a literal word run.
        const WORD = 1 << 5;
        /// Byte that ends a URL.
        const URL_STOP = 1 << 6;
    }
}

const fn classify(b: u8) -> ByteClass {
    match b {
        b' ' | b'\t' | b'\r' | b'\n' | 0x0B | 0x0C => ByteClass::SPACE,
        b'0'..=b'9' => ByteClass::DIGIT
            .union(ByteClass::HEX)
            .union(ByteClass::WORD),
        b'a'..=b'f' | b'A'..=b'F' => ByteClass::ALPHA
            .union(ByteClass::HEX)
            .union(ByteClass::WORD),
        b'g'..=b'z' | b'G'..=b'Z' => ByteClass::ALPHA.union(ByteClass::WORD),
        b'"' | b'\'' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b'<' | b'>' => {
            ByteClass::PUNCT.union(ByteClass::URL_STOP)
        }
        b'=' | b',' | b';' | b':' => ByteClass::PUNCT,
        0 => ByteClass::empty(),
        // Connectors, other ASCII symbols, control bytes and every non-ASCII byte.
        _ => ByteClass::WORD,
    }
}

const fn build_table() -> [ByteClass; 256] {
    let mut table = [ByteClass::empty(); 256];
    let mut i = 0;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "i < 256 always fits in u8"
        )]
        let b = i as u8;
        table[i] = classify(b);
        i += 1;
    }
    table
}

static TABLE: [ByteClass; 256] = build_table();

/// Class set of a byte.
#[inline]
pub fn of(b: u8) -> ByteClass {
    TABLE[b as usize]
}

/// ASCII whitespace.
#[inline]
pub fn is_space(b: u8) -> bool {
    of(b).contains(ByteClass::SPACE)
}

/// Decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    of(b).contains(ByteClass::DIGIT)
}

/// Hexadecimal digit.
#[inline]
pub fn is_hex(b: u8) -> bool {
    of(b).contains(ByteClass::HEX)
}

/// ASCII letter or digit.
#[inline]
pub fn is_alnum(b: u8) -> bool {
    of(b).intersects(ByteClass::ALPHA.union(ByteClass::DIGIT))
}

/// Standalone punctuation.
#[inline]
pub fn is_punct(b: u8) -> bool {
    of(b).contains(ByteClass::PUNCT)
}

/// Byte that can continue a literal word run.
#[inline]
pub fn is_word(b: u8) -> bool {
    of(b).contains(ByteClass::WORD)
}

/// Byte that ends a URL.
#[inline]
pub fn is_url_stop(b: u8) -> bool {
    of(b).intersects(ByteClass::URL_STOP.union(ByteClass::SPACE)) || b == 0
}

/// Whether `b` may follow a structured token: end of input (`0x00`),
/// whitespace, or standalone punctuation.
#[inline]
pub fn is_boundary(b: u8) -> bool {
    b == 0 || of(b).intersects(ByteClass::SPACE.union(ByteClass::PUNCT))
}

/// Byte at `i`, or `0x00` past the end of `s`.
#[inline]
pub fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

/// A `.` at `i` that ends a sentence rather than joining two word parts.
#[inline]
pub fn is_trailing_dot(s: &[u8], i: usize) -> bool {
    byte_at(s, i) == b'.' && !is_alnum(byte_at(s, i + 1))
}
