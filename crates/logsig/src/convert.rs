//! Raw tag to token kind conversion.

use logsig_core::RawTag;

use crate::token::TokenKind;

/// Map a raw tag to the kind of token it produces. Trivia produce none.
pub(crate) fn kind_of(tag: RawTag) -> Option<TokenKind> {
    match tag {
        RawTag::Literal | RawTag::Punct => Some(TokenKind::Literal),
        RawTag::Integer => Some(TokenKind::Integer),
        RawTag::Float => Some(TokenKind::Float),
        RawTag::Ipv4 => Some(TokenKind::Ipv4),
        RawTag::Ipv6 => Some(TokenKind::Ipv6),
        RawTag::Mac => Some(TokenKind::Mac),
        RawTag::Time => Some(TokenKind::Time),
        RawTag::Url => Some(TokenKind::Url),
        RawTag::Whitespace | RawTag::Eof => None,
    }
}
