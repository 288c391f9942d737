//! Dotted-decimal recognizer: integers, floats and IPv4 addresses.
//!
//! A numeric candidate is a digit run optionally extended by `.digits`
//! groups. The group count decides the kind:
//!
//! | groups | kind |
//! |--------|------|
//! | 1 | integer |
//! | 2 | float |
//! | 4, each 1-3 digits in `0..=255` | IPv4 |
//!
//! Anything else (3 or 5+ groups, an out-of-range octet) is not numeric.
//! The match must also end at a token boundary; `0x0`, `1/60s` and
//! `218-161-81-238.hinet.net` are words, not numbers.

use crate::class::{byte_at, is_boundary, is_digit, is_trailing_dot};
use crate::RawTag;

/// Shape facts gathered while walking the dotted groups.
#[derive(Clone, Copy, Debug, Default)]
struct Groups {
    count: u32,
    all_octets: bool,
}

/// Match an integer, float or IPv4 address at the start of `s`.
///
/// Returns the tag and byte length, or `None` when the run is not numeric
/// or does not end at a boundary.
pub fn scan_numeric(s: &[u8]) -> Option<(RawTag, usize)> {
    if !is_digit(byte_at(s, 0)) {
        return None;
    }

    let mut groups = Groups {
        count: 0,
        all_octets: true,
    };
    let mut i = 0;
    loop {
        let start = i;
        let mut value: u32 = 0;
        while is_digit(byte_at(s, i)) {
            value = value
                .saturating_mul(10)
                .saturating_add(u32::from(s[i] - b'0'));
            i += 1;
        }
        groups.count += 1;
        if i - start > 3 || value > 255 {
            groups.all_octets = false;
        }
        if byte_at(s, i) == b'.' && is_digit(byte_at(s, i + 1)) {
            i += 1;
        } else {
            break;
        }
    }

    let tag = match groups.count {
        1 => RawTag::Integer,
        2 => RawTag::Float,
        4 if groups.all_octets => RawTag::Ipv4,
        _ => return None,
    };

    let next = byte_at(s, i);
    let ends_cleanly = is_boundary(next)
        || is_trailing_dot(s, i)
        || (tag == RawTag::Ipv4 && next == b'/');
    ends_cleanly.then_some((tag, i))
}

/// Match exactly a dotted-quad IPv4 address at the start of `s`.
///
/// Used by the address engine for the IPv4 tail of an IPv6 address.
pub fn scan_ipv4(s: &[u8]) -> Option<usize> {
    match scan_numeric(s)? {
        (RawTag::Ipv4, len) => Some(len),
        _ => None,
    }
}
