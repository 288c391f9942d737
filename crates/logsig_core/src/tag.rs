//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! A [`RawToken`] is a `(tag, len)` pair. Token values are never copied at
//! this layer; the caller slices them out of the line when it needs them.

/// Raw token kind.
///
/// `#[repr(u8)]` with semantic ranges:
/// - 0-15: structured tokens and literals
/// - 16-31: punctuation
/// - 112-127: trivia
/// - 255: end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Word run, or any byte no other recognizer claims.
    Literal = 0,
    /// Decimal digit run.
    Integer = 1,
    /// `digits.digits`.
    Float = 2,
    /// Dotted quad with every octet in `0..=255`.
    Ipv4 = 3,
    /// Colon-separated hex groups with IPv6 shape.
    Ipv6 = 4,
    /// Six two-digit hex groups.
    Mac = 5,
    /// Timestamp matched by one of the time grammars.
    Time = 6,
    /// Scheme-prefixed URL.
    Url = 7,

    /// One standalone punctuation byte (also a leading `-`, `/` or `.`).
    Punct = 16,

    /// Run of ASCII whitespace between tokens.
    Whitespace = 112,

    /// End of input. Always has `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Lowercase name, as used in signatures (`%ipv4%`) and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Literal => "literal",
            RawTag::Integer => "integer",
            RawTag::Float => "float",
            RawTag::Ipv4 => "ipv4",
            RawTag::Ipv6 => "ipv6",
            RawTag::Mac => "mac",
            RawTag::Time => "time",
            RawTag::Url => "url",
            RawTag::Punct => "punct",
            RawTag::Whitespace => "whitespace",
            RawTag::Eof => "eof",
        }
    }

    /// Whether the tag carries no token (whitespace or end of input).
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Eof)
    }

    /// Whether the tag is one of the structured kinds (time, numbers,
    /// addresses, URL).
    #[inline]
    pub fn is_structured(self) -> bool {
        (self as u8) >= RawTag::Integer as u8 && (self as u8) <= RawTag::Url as u8
    }
}

/// A raw token: tag plus byte length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
