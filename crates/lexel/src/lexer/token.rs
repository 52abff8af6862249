use compact_str::CompactString;
use std::fmt;

/// A token produced by the scanner: a classification tag, the literal text
/// matched, and the 1-based source line. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source text this token was matched from.
    pub text: CompactString,
    /// 1-based line number, incremented on each newline consumed.
    pub line: u32,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<CompactString>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind.name(), self.text)
    }
}

/// The closed set of token classifications the scanner produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word from the injected keyword set.
    Keyword,
    /// Letter-initial lexeme not in the keyword set.
    Identifier,
    /// Digit run without a decimal point.
    Integer,
    /// Digit run with one decimal point and trailing digits.
    Decimal,
    /// Double-quoted literal.
    Str,
    /// Single-quoted literal.
    Char,
    /// Single character from the injected operator set.
    Operator,
}

impl TokenKind {
    /// Stable display name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "Keyword",
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Str => "String",
            Self::Char => "Char",
            Self::Operator => "Operator",
        }
    }
}
