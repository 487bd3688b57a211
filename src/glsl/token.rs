use std::fmt;

/// Semantic class of a lexed span of GLSL source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    String,
    Number,
    Keyword,
    Type,
    Builtin,
    Preprocessor,
    Operator,
    Identifier,
    Punctuation,
    Unknown,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Builtin,
        TokenKind::Preprocessor,
        TokenKind::Operator,
        TokenKind::Identifier,
        TokenKind::Punctuation,
        TokenKind::Unknown,
    ];

    /// Lowercase name used in markup class names and token listings.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Builtin => "builtin",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Operator => "operator",
            TokenKind::Identifier => "identifier",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified, contiguous slice of the source.
///
/// `text` borrows from the tokenized input and is never altered, so joining
/// the texts of a token sequence gives back the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
