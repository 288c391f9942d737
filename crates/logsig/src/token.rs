//! Token data model.
//!
//! A [`Token`] is one classified span of a log line: its [`TokenKind`],
//! an optional semantic [`Field`], the exact text, and a key/value
//! [`Role`].

use std::fmt;

/// Kind of a scanned token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenKind {
    /// Word, punctuation, or anything no structured recognizer claimed.
    #[default]
    Literal,
    Integer,
    Float,
    Ipv4,
    Ipv6,
    Mac,
    Time,
    Url,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Literal,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::Ipv4,
        TokenKind::Ipv6,
        TokenKind::Mac,
        TokenKind::Time,
        TokenKind::Url,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Literal => "literal",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::Ipv4 => "ipv4",
            TokenKind::Ipv6 => "ipv6",
            TokenKind::Mac => "mac",
            TokenKind::Time => "time",
            TokenKind::Url => "url",
        }
    }

    /// Signature placeholder for structured kinds (`%ipv4%`). `None` for
    /// literals, which render as their own text or not at all.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            TokenKind::Literal => None,
            TokenKind::Integer => Some("%integer%"),
            TokenKind::Float => Some("%float%"),
            TokenKind::Ipv4 => Some("%ipv4%"),
            TokenKind::Ipv6 => Some("%ipv6%"),
            TokenKind::Mac => Some("%mac%"),
            TokenKind::Time => Some("%time%"),
            TokenKind::Url => Some("%url%"),
        }
    }

    #[inline]
    pub fn is_structured(self) -> bool {
        self != TokenKind::Literal
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Defines the [`Field`] enum together with its name table.
///
/// Each entry is `Variant => "name"`; the generated type has:
/// - `ALL` listing every field in declaration order
/// - `name()` returning the stable lowercase name
/// - `from_name()` for the reverse lookup
macro_rules! define_fields {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Semantic meaning of a token within its line.
        ///
        /// The scanner never sets this; it is for callers that annotate
        /// sequences (pattern stores, parsers built on top).
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub enum Field {
            #[default]
            Unknown,
            $($variant,)*
        }

        impl Field {
            pub const ALL: &'static [Field] = &[Field::Unknown, $(Field::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    Field::Unknown => "unknown",
                    $(Field::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Field> {
                match name {
                    "unknown" => Some(Field::Unknown),
                    $($name => Some(Field::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

define_fields! {
    RecvTime => "recvtime",
    MsgId => "msgid",
    Priority => "priority",
    MsgTime => "msgtime",
    Severity => "severity",
    AppHost => "apphost",
    AppIp => "appip",
    AppVendor => "appvendor",
    AppName => "appname",
    SrcDomain => "srcdomain",
    SrcZone => "srczone",
    SrcHost => "srchost",
    SrcIp => "srcip",
    SrcIpNat => "srcipnat",
    SrcPort => "srcport",
    SrcPortNat => "srcportnat",
    SrcMac => "srcmac",
    SrcUser => "srcuser",
    SrcUid => "srcuid",
    SrcGid => "srcgid",
    SrcEmail => "srcemail",
    DstDomain => "dstdomain",
    DstZone => "dstzone",
    DstHost => "dsthost",
    DstIp => "dstip",
    DstIpNat => "dstipnat",
    DstPort => "dstport",
    DstPortNat => "dstportnat",
    DstMac => "dstmac",
    DstUser => "dstuser",
    DstUid => "dstuid",
    DstGid => "dstgid",
    DstEmail => "dstemail",
    Protocol => "protocol",
    InIface => "iniface",
    OutIface => "outiface",
    PolicyId => "policyid",
    SessionId => "sessionid",
    Object => "object",
    Action => "action",
    Command => "command",
    Method => "method",
    Status => "status",
    Reason => "reason",
    BytesRecv => "bytesrecv",
    BytesSent => "bytessent",
    PktsRecv => "pktsrecv",
    PktsSent => "pktssent",
    Duration => "duration",
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key/value role of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Role {
    #[default]
    None,
    Key,
    Value,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::None => "none",
            Role::Key => "key",
            Role::Value => "value",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scanned token. `value` is the exact text from the line.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Token {
    pub kind: TokenKind,
    pub field: Field,
    pub value: String,
    pub role: Role,
}

impl Token {
    /// A token with no field and no role.
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            field: Field::Unknown,
            value: value.into(),
            role: Role::None,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, value)
    }

    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = field;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// A literal made of exactly one character.
    pub fn is_single_char(&self) -> bool {
        let mut chars = self.value.chars();
        chars.next().is_some() && chars.next().is_none()
    }

    /// Whether this token is exactly the literal `text`.
    pub fn is_literal(&self, text: &str) -> bool {
        self.kind == TokenKind::Literal && self.value == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
