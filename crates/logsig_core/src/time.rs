//! Timestamp recognizer driven by an ordered list of grammars.
//!
//! A [`TimeGrammar`] is a flat sequence of [`Elem`]s matched left to right
//! with no backtracking, except that an [`Elem::Opt`] group is all or
//! nothing. The first grammar in priority order that matches and ends at a
//! token boundary wins.

use crate::class::{byte_at, is_boundary, is_digit, is_trailing_dot};

/// One element of a timestamp grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elem {
    /// A run of `min..=max` digits whose value lies in `lo..=hi`.
    Num { min: u8, max: u8, lo: u32, hi: u32 },
    /// One or more digits, any count and value (fractional seconds).
    Digits,
    /// English month name, full or abbreviated, any case.
    Month,
    /// Exactly this byte.
    Byte(u8),
    /// Any one of these bytes.
    OneOf(&'static [u8]),
    /// One or more ASCII spaces (syslog pads single-digit days).
    Spaces,
    /// `Z`, or a numeric UTC offset `+HHMM` / `-HH:MM`.
    Offset,
    /// The inner sequence, or nothing.
    Opt(&'static [Elem]),
}

/// A named timestamp layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeGrammar {
    pub name: &'static str,
    pub elems: &'static [Elem],
}

impl TimeGrammar {
    pub const fn new(name: &'static str, elems: &'static [Elem]) -> Self {
        Self { name, elems }
    }

    /// Length of the match at the start of `s`, if the whole grammar
    /// matches and the match ends at a token boundary.
    pub fn match_len(&self, s: &[u8]) -> Option<usize> {
        let end = match_seq(self.elems, s, 0)?;
        (is_boundary(byte_at(s, end)) || is_trailing_dot(s, end)).then_some(end)
    }
}

const fn num(min: u8, max: u8, lo: u32, hi: u32) -> Elem {
    Elem::Num { min, max, lo, hi }
}

const YEAR: Elem = num(4, 4, 0, 9999);
const MONTH_NUM: Elem = num(2, 2, 1, 12);
const DAY: Elem = num(2, 2, 1, 31);
const HOUR: Elem = num(2, 2, 0, 23);
const MINUTE: Elem = num(2, 2, 0, 59);
const SECOND: Elem = num(2, 2, 0, 60);
const FRACTION_DIGITS: &[Elem] = &[Elem::Byte(b'.'), Elem::Digits];
const FRACTION: Elem = Elem::Opt(FRACTION_DIGITS);

/// `D/Mon/YYYY:HH:MM:SS -ZZZZ`: Apache/NCSA access logs.
const ACCESS_LOG: &[Elem] = &[
    num(1, 2, 1, 31),
    Elem::Byte(b'/'),
    Elem::Month,
    Elem::Byte(b'/'),
    YEAR,
    Elem::Byte(b':'),
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
    Elem::Opt(&[Elem::Byte(b' '), Elem::Offset]),
];

/// `YYYY-MM-DDTHH:MM:SS[.fff][offset]`: RFC 3339.
const RFC3339: &[Elem] = &[
    YEAR,
    Elem::Byte(b'-'),
    MONTH_NUM,
    Elem::Byte(b'-'),
    DAY,
    Elem::OneOf(b"Tt"),
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
    FRACTION,
    Elem::Opt(&[Elem::Offset]),
];

/// `YYYY-MM-DD HH:MM:SS[.fff]`
const ISO_SPACED: &[Elem] = &[
    YEAR,
    Elem::Byte(b'-'),
    MONTH_NUM,
    Elem::Byte(b'-'),
    DAY,
    Elem::Spaces,
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
    FRACTION,
];

/// `YYYY/MM/DD HH:MM:SS[.fff]`
const SLASHED: &[Elem] = &[
    YEAR,
    Elem::Byte(b'/'),
    MONTH_NUM,
    Elem::Byte(b'/'),
    DAY,
    Elem::Spaces,
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
    FRACTION,
];

/// `Mon D YYYY HH:MM:SS`
const SYSLOG_WITH_YEAR: &[Elem] = &[
    Elem::Month,
    Elem::Spaces,
    num(1, 2, 1, 31),
    Elem::Spaces,
    YEAR,
    Elem::Spaces,
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
];

/// `Mon D HH:MM:SS[.fff]`: BSD syslog.
const SYSLOG: &[Elem] = &[
    Elem::Month,
    Elem::Spaces,
    num(1, 2, 1, 31),
    Elem::Spaces,
    HOUR,
    Elem::Byte(b':'),
    MINUTE,
    Elem::Byte(b':'),
    SECOND,
    FRACTION,
];

/// `M/D/YYYY HH:MM[:SS]`
const US_DATE: &[Elem] = &[
    num(1, 2, 1, 12),
    Elem::Byte(b'/'),
    num(1, 2, 1, 31),
    Elem::Byte(b'/'),
    YEAR,
    Elem::Spaces,
    num(1, 2, 0, 23),
    Elem::Byte(b':'),
    MINUTE,
    Elem::Opt(&[Elem::Byte(b':'), SECOND]),
];

/// Built-in grammars in priority order.
pub const BUILTIN_GRAMMARS: [TimeGrammar; 7] = [
    TimeGrammar::new("access-log", ACCESS_LOG),
    TimeGrammar::new("rfc3339", RFC3339),
    TimeGrammar::new("iso-spaced", ISO_SPACED),
    TimeGrammar::new("slashed", SLASHED),
    TimeGrammar::new("syslog-year", SYSLOG_WITH_YEAR),
    TimeGrammar::new("syslog", SYSLOG),
    TimeGrammar::new("us-date", US_DATE),
];

/// Match the first grammar (in order) that accepts the start of `s`.
///
/// A grammar that matches zero bytes is ignored.
pub fn scan_time(s: &[u8], grammars: &[TimeGrammar]) -> Option<usize> {
    grammars
        .iter()
        .find_map(|g| g.match_len(s).filter(|&len| len > 0))
}

fn match_seq(elems: &[Elem], s: &[u8], mut at: usize) -> Option<usize> {
    for elem in elems {
        at = match_elem(*elem, s, at)?;
    }
    Some(at)
}

fn match_elem(elem: Elem, s: &[u8], at: usize) -> Option<usize> {
    match elem {
        Elem::Num { min, max, lo, hi } => {
            let mut end = at;
            let mut value: u32 = 0;
            while end - at < usize::from(max) && is_digit(byte_at(s, end)) {
                value = value
                    .saturating_mul(10)
                    .saturating_add(u32::from(s[end] - b'0'));
                end += 1;
            }
            (end - at >= usize::from(min) && (lo..=hi).contains(&value)).then_some(end)
        }
        Elem::Digits => {
            let end = at + s.get(at..)?.iter().take_while(|&&b| is_digit(b)).count();
            (end > at).then_some(end)
        }
        Elem::Month => match_month(s, at),
        Elem::Byte(b) => (byte_at(s, at) == b && b != 0).then_some(at + 1),
        Elem::OneOf(set) => {
            let b = byte_at(s, at);
            (b != 0 && set.contains(&b)).then_some(at + 1)
        }
        Elem::Spaces => {
            let end = at + s.get(at..)?.iter().take_while(|&&b| b == b' ').count();
            (end > at).then_some(end)
        }
        Elem::Offset => match_offset(s, at),
        Elem::Opt(inner) => Some(match_seq(inner, s, at).unwrap_or(at)),
    }
}

const MONTHS: [&[u8]; 12] = [
    b"january",
    b"february",
    b"march",
    b"april",
    b"may",
    b"june",
    b"july",
    b"august",
    b"september",
    b"october",
    b"november",
    b"december",
];

fn match_month(s: &[u8], at: usize) -> Option<usize> {
    let rest = s.get(at..)?;
    let starts = |name: &[u8]| {
        rest.get(..name.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(name))
    };
    let len = MONTHS
        .iter()
        .find(|&&full| starts(full))
        .map(|full| full.len())
        .or_else(|| starts(b"sept").then_some(4))
        .or_else(|| MONTHS.iter().any(|full| starts(&full[..3])).then_some(3))?;
    Some(at + len)
}

fn match_offset(s: &[u8], at: usize) -> Option<usize> {
    match byte_at(s, at) {
        b'Z' | b'z' => Some(at + 1),
        b'+' | b'-' => {
            let at = match_elem(num(2, 2, 0, 23), s, at + 1)?;
            let at = if byte_at(s, at) == b':' { at + 1 } else { at };
            match_elem(MINUTE, s, at)
        }
        _ => None,
    }
}
