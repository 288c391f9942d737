//! Scheme-prefixed URL recognizer.

use std::borrow::Cow;

use crate::class::{byte_at, is_url_stop};

/// Schemes recognized when the caller configures none of its own.
pub const DEFAULT_URL_SCHEMES: &[Cow<'static, str>] = &[
    Cow::Borrowed("http://"),
    Cow::Borrowed("https://"),
    Cow::Borrowed("ftp://"),
];

/// Match a URL at the start of `s`.
///
/// The scheme prefix is matched without regard to case. The URL then runs
/// up to the next whitespace, quote or bracket; `\` escapes the byte after
/// it. A bare scheme with nothing after it is not a URL.
pub fn scan_url(s: &[u8], schemes: &[Cow<'static, str>]) -> Option<usize> {
    let scheme = schemes.iter().find(|scheme| {
        let scheme = scheme.as_bytes();
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })?;

    let start = scheme.len();
    let mut i = start;
    loop {
        let b = byte_at(s, i);
        if b == b'\\' && i + 1 < s.len() {
            i += 2;
        } else if is_url_stop(b) {
            break;
        } else {
            i += 1;
        }
    }
    (i > start).then_some(i)
}
