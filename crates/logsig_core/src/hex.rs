//! Hex/address disambiguation: IPv6, MAC, or neither.
//!
//! IPv6 and MAC addresses are both colon-separated hex groups, and so are
//! plenty of things that are not addresses (`0:09:23`, key fingerprints).
//! The engine decides in two phases:
//!
//! 1. [`HexScan`] steps one byte at a time through a run of hex digits and
//!    colons, keeping only local counters. It halts on the first byte that
//!    can never belong to an address group.
//! 2. [`classify`] checks the shape of the scanned span: group count,
//!    group width and where the `::` compression marker sits.
//!
//! # Validity rule
//!
//! A span can only be an address if it contains at most one `::` marker
//! and never three or more consecutive colons:
//!
//! ```text
//! colon_series < 2 && max_colon_run < 3
//! ```
//!
//! where a *colon series* is a run of two or more consecutive colons. A
//! group wider than four hex digits also disqualifies the span.

use memchr::memmem;

use crate::class::{byte_at, is_boundary, is_hex, is_trailing_dot};
use crate::{numeric, RawTag};

/// Named states of the hex scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexState {
    /// Nothing consumed yet.
    #[default]
    Start,
    /// Inside a run of hex digits.
    Group,
    /// Inside a run of colons.
    Colons,
    /// A byte that cannot continue the span was seen.
    Halted,
}

/// Result of feeding one byte to [`HexScan::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexStep {
    /// The byte was consumed; keep feeding.
    Continue,
    /// The byte was rejected (or the scan already halted). Stop feeding.
    Halt,
}

/// Shape of a scanned span that passed the validity rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexShape {
    /// Six groups of exactly two hex digits.
    Mac,
    /// Eight groups, or fewer around a single `::`.
    Ipv6,
    /// Hex-valid, but neither address shape.
    Unshaped,
}

/// Per-candidate scan state. Reset (or create a new one) for every candidate.
#[derive(Clone, Debug, Default)]
pub struct HexScan {
    state: HexState,
    /// Bytes consumed so far.
    consumed: usize,
    /// Width of the current hex group.
    group_len: usize,
    /// A group exceeded [`HexScan::MAX_GROUP_WIDTH`].
    over_wide: bool,
    /// Length of the current colon run; 0 while inside a group.
    colon_run: u32,
    /// Number of colon runs of length two or more.
    colon_series: u32,
    /// Longest colon run seen.
    max_colon_run: u32,
}

impl HexScan {
    /// Widest hex group an address may contain.
    pub const MAX_GROUP_WIDTH: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter so the scan can be reused for a new candidate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn state(&self) -> HexState {
        self.state
    }

    /// Number of `::`-style colon runs seen.
    pub fn colon_series(&self) -> u32 {
        self.colon_series
    }

    /// Longest run of consecutive colons seen.
    pub fn max_colon_run(&self) -> u32 {
        self.max_colon_run
    }

    /// Feed one byte.
    pub fn step(&mut self, b: u8) -> HexStep {
        if self.state == HexState::Halted {
            return HexStep::Halt;
        }
        if is_hex(b) {
            self.group_len += 1;
            if self.group_len > Self::MAX_GROUP_WIDTH {
                self.over_wide = true;
                self.state = HexState::Halted;
                return HexStep::Halt;
            }
            self.colon_run = 0;
            self.state = HexState::Group;
        } else if b == b':' {
            self.colon_run += 1;
            if self.colon_run == 2 {
                self.colon_series += 1;
            }
            self.max_colon_run = self.max_colon_run.max(self.colon_run);
            self.group_len = 0;
            self.state = HexState::Colons;
        } else {
            self.state = HexState::Halted;
            return HexStep::Halt;
        }
        self.consumed += 1;
        HexStep::Continue
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// More than one `::` marker, or three or more colons in a row.
    pub fn breaks_colon_rule(&self) -> bool {
        self.colon_series >= 2 || self.max_colon_run >= 3
    }

    /// The validity rule: could the consumed span be an address at all?
    pub fn is_addressable(&self) -> bool {
        self.consumed > 0 && !self.over_wide && !self.breaks_colon_rule()
    }

    /// Length of the candidate span.
    ///
    /// A single trailing colon is punctuation after the span (`sshd:`), not
    /// part of it; a trailing `::` is kept (`fe80::`).
    pub fn span(&self) -> usize {
        if self.colon_run == 1 {
            self.consumed - 1
        } else {
            self.consumed
        }
    }
}

/// Classify a hex/colon span by shape alone.
///
/// Assumes the span already passed [`HexScan::is_addressable`].
pub fn classify(span: &[u8]) -> HexShape {
    if is_mac(span) {
        HexShape::Mac
    } else if is_ipv6(span, 0) {
        HexShape::Ipv6
    } else {
        HexShape::Unshaped
    }
}

/// What the address recognizer found at the start of a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressScan {
    /// An address, or an unshaped hex/colon literal, of this length.
    Claimed(RawTag, usize),
    /// A hex/colon run of this length that breaks the colon rule (`:::`,
    /// or a second `::`). No part of it is an address, so a scanner must
    /// not retry the recognizer on a suffix of the run.
    Broken(usize),
    /// Nothing to claim at this position.
    Unclaimed,
}

/// Match an IPv6 address, a MAC address, or an unshaped hex/colon literal
/// at the start of `s`.
///
/// Spans with fewer than two colons are never claimed, so `sshd:auth` or
/// `:10246` fall through to the other recognizers. Neither is a span that
/// starts with a single `:`: in `elapsed:00:00:05` that colon separates the
/// key and stays punctuation. A claimed span must be followed by a
/// boundary; an address may also be followed by `/` (prefix length) or `%`
/// (zone index).
pub fn scan_address(s: &[u8]) -> Option<(RawTag, usize)> {
    match examine_address(s) {
        AddressScan::Claimed(tag, len) => Some((tag, len)),
        AddressScan::Broken(_) | AddressScan::Unclaimed => None,
    }
}

/// Like [`scan_address`], but also reports runs that break the colon rule.
pub fn examine_address(s: &[u8]) -> AddressScan {
    let mut hex = HexScan::new();
    for &b in s {
        if hex.step(b) == HexStep::Halt {
            break;
        }
    }
    if hex.breaks_colon_rule() {
        return AddressScan::Broken(hex.consumed());
    }
    if !hex.is_addressable() || (byte_at(s, 0) == b':' && byte_at(s, 1) != b':') {
        return AddressScan::Unclaimed;
    }

    let span = hex.span();
    let candidate = &s[..span];
    if memchr::memchr_iter(b':', candidate).count() < 2 {
        return AddressScan::Unclaimed;
    }

    let next = byte_at(s, span);
    if next == b'.' {
        if let Some(len) = ipv6_with_ipv4_tail(s, span) {
            return AddressScan::Claimed(RawTag::Ipv6, len);
        }
    }

    let tag = match classify(candidate) {
        HexShape::Mac => RawTag::Mac,
        HexShape::Ipv6 => RawTag::Ipv6,
        HexShape::Unshaped => RawTag::Literal,
    };
    let is_address = tag != RawTag::Literal;
    let ends_cleanly = is_boundary(next)
        || is_trailing_dot(s, span)
        || (is_address && (next == b'/' || next == b'%'));
    if ends_cleanly {
        AddressScan::Claimed(tag, span)
    } else {
        AddressScan::Unclaimed
    }
}

fn is_mac(span: &[u8]) -> bool {
    span.len() == 17 && span.split(|&b| b == b':').all(|group| group.len() == 2)
}

/// IPv6 group layout check. `extra` groups are contributed by an embedded
/// IPv4 tail (two groups' worth).
fn is_ipv6(text: &[u8], extra: usize) -> bool {
    if let Some(at) = memmem::find(text, b"::") {
        let left = &text[..at];
        let right = &text[at + 2..];
        if memmem::find(right, b"::").is_some() {
            return false;
        }
        match (group_count(left), group_count(right)) {
            (Some(l), Some(r)) => l + r + extra <= 7,
            _ => false,
        }
    } else {
        group_count(text).is_some_and(|n| n + extra == 8)
    }
}

/// Count single-colon-separated groups of 1-4 hex digits. An empty part
/// has zero groups; an empty group anywhere else is malformed.
fn group_count(part: &[u8]) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }
    let mut count = 0;
    for group in part.split(|&b| b == b':') {
        if group.is_empty()
            || group.len() > HexScan::MAX_GROUP_WIDTH
            || !group.iter().all(|&b| is_hex(b))
        {
            return None;
        }
        count += 1;
    }
    Some(count)
}

/// `::ffff:10.0.0.1`: the last hex group is really the first octet of an
/// IPv4 address. Returns the full length when the head is a valid IPv6
/// prefix for a two-group tail.
fn ipv6_with_ipv4_tail(s: &[u8], span: usize) -> Option<usize> {
    let candidate = &s[..span];
    let tail_start = memchr::memrchr(b':', candidate)? + 1;
    let v4_len = numeric::scan_ipv4(&s[tail_start..])?;
    let head = &candidate[..tail_start];
    let head = if head.ends_with(b"::") {
        head
    } else {
        &head[..head.len() - 1]
    };
    is_ipv6(head, 2).then_some(tail_start + v4_len)
}
