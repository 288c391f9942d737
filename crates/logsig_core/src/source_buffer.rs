//! Owned copy of one log line, followed by a `0x00` sentinel.
//!
//! Recognizers read the byte after a token without checking the length
//! first: past the line there is always the sentinel, then zero padding up
//! to a 64-byte multiple.
//!
//! Positions are `u32`. Lines that do not fit are rejected up front with
//! [`SourceTooLarge`] instead of being truncated.

use std::fmt;

use crate::Cursor;

/// Padding granularity.
const CACHE_LINE: usize = 64;

/// Largest line, in bytes, a [`SourceBuffer`] accepts.
///
/// Leaves one cache line of headroom below `u32::MAX` so cursor arithmetic
/// (`pos + n` for peeks) can never overflow.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - CACHE_LINE;

/// Sentinel-terminated buffer for one log line.
///
/// # Layout
///
/// ```text
/// [line_bytes..., 0x00, padding_zeros...]
///  ^              ^     ^
///  0              |     rounded up to 64-byte boundary
///            source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[line_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual line content (excludes sentinel and padding).
    source_len: u32,
}

/// The line is longer than [`MAX_SOURCE_LEN`] bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceTooLarge {
    /// Length of the rejected line in bytes.
    pub len: usize,
}

impl fmt::Display for SourceTooLarge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source of {} bytes exceeds the {MAX_SOURCE_LEN}-byte scanner limit",
            self.len
        )
    }
}

impl std::error::Error for SourceTooLarge {}

impl SourceBuffer {
    /// Copy `source` into a cache-line-padded buffer with a `0x00` sentinel.
    pub fn new(source: &str) -> Result<Self, SourceTooLarge> {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();
        if source_len > MAX_SOURCE_LEN {
            return Err(SourceTooLarge { len: source_len });
        }
        let Ok(source_len_u32) = u32::try_from(source_len) else {
            return Err(SourceTooLarge { len: source_len });
        };

        // Line, sentinel, then zeros up to the next multiple of 64.
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding stay zero.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Ok(Self {
            buf,
            source_len: source_len_u32,
        })
    }

    /// Returns the line bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Line bytes plus sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// A cursor at the start of the line.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the line content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// `SourceBuffer` is a `Vec` plus a `u32`; keep it that way.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

#[cfg(test)]
mod tests;
