//! Cursor over a sentinel-terminated line buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the line length. An interior `0x00` (at
//! `pos < source_len`) is ordinary content.

use crate::class;

/// Cursor over a sentinel-terminated byte buffer.
///
/// Obtained from [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
/// `Copy`, so a recognizer may look ahead on a copy and throw it away.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and all bytes after it are `0x00` padding.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (line + sentinel + padding).
    buf: &'a [u8],
    pos: u32,
    /// Length of actual line content (excludes sentinel and padding).
    source_len: u32,
}

// Slice plus two offsets.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at end of input).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte after the current one. Past the line this reads the
    /// sentinel or padding, so it is `0x00`.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(1)
    }

    /// Returns the byte `n` positions ahead, or `0x00` past the padding.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.buf
            .get(self.pos as usize + n as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Returns the byte just before the current position (`0x00` at the
    /// start of the line).
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos.checked_sub(1) {
            Some(at) => self.buf[at as usize],
            None => 0,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached the end of the line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the line.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the line content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The unconsumed part of the line, without sentinel or padding.
    ///
    /// Recognizers work on this slice; its end is the end of input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    /// Line bytes between two absolute positions.
    #[inline]
    pub fn bytes(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds line length {}",
            self.source_len
        );
        &self.buf[start as usize..end as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel terminates the loop.
    /// All predicates in [`class`] satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past a run of ASCII whitespace (space, tab, CR, LF, VT, FF).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(class::is_space);
    }

    /// Width of the UTF-8 sequence led by `byte`. Bytes that cannot lead a
    /// multi-byte sequence count as one.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole codepoint, so word runs never end mid-character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Find the position of the quote that closes the one under the cursor.
    ///
    /// Searches the rest of the line for the same quote byte, skipping
    /// bytes escaped with `\`. Returns the absolute position of the closing
    /// quote, or `None` if the quote is never closed on this line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by source_len which fits in u32"
    )]
    pub fn closing_quote(&self) -> Option<u32> {
        let quote = self.current();
        let body_start = self.pos as usize + 1;
        let end = self.source_len as usize;
        let mut at = body_start;
        while at < end {
            let off = memchr::memchr2(quote, b'\\', &self.buf[at..end])?;
            let found = at + off;
            if self.buf[found] == quote {
                return Some(found as u32);
            }
            // Backslash: skip it and the escaped byte.
            at = found + 2;
        }
        None
    }
}

#[cfg(test)]
mod tests;
