//! Single-pass GLSL tokenizer.
//!
//! At every position the scanners in [`PATTERNS`] are tried in priority order
//! and the first one that matches a non-empty prefix wins. Identifier matches
//! are then reclassified through the lexicon (keyword > type > builtin).
//!
//! The scan is total: every input, including malformed or truncated shader
//! text, is split into tokens whose texts concatenate back to the input.

use super::lexicon;
use super::token::{Token, TokenKind};

/// Returns the byte length of the match anchored at the start of `rest`, or 0.
type Scanner = fn(&str) -> usize;

/// Priority order of the anchored patterns, highest first.
const PATTERNS: [(TokenKind, Scanner); 9] = [
    (TokenKind::Comment, scan_comment),
    (TokenKind::String, scan_string),
    (TokenKind::Preprocessor, scan_preprocessor),
    (TokenKind::Number, scan_number),
    (TokenKind::Identifier, scan_identifier),
    (TokenKind::Whitespace, scan_whitespace),
    (TokenKind::Operator, scan_operator),
    (TokenKind::Punctuation, scan_punctuation),
    (TokenKind::Unknown, scan_unknown),
];

/// Iterator over the tokens of a GLSL source string.
pub struct Tokenizer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the next token.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let (kind, len) = PATTERNS
            .iter()
            .find_map(|&(kind, scan)| match scan(rest) {
                0 => None,
                len => Some((kind, len)),
            })
            // scan_unknown matches any non-empty input; this only keeps the scan moving
            .unwrap_or((TokenKind::Unknown, first_char_len(rest)));

        let text = &rest[..len];
        let kind = match kind {
            TokenKind::Identifier => classify_identifier(text),
            other => other,
        };

        self.pos += len;
        Some(Token::new(kind, text))
    }
}

/// Splits `source` into classified tokens.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Tokenizer::new(source).collect();
    tracing::trace!(bytes = source.len(), tokens = tokens.len(), "tokenized glsl source");
    tokens
}

/// Reclassifies an identifier-shaped word through the lexicon.
pub fn classify_identifier(word: &str) -> TokenKind {
    if lexicon::is_keyword(word) {
        TokenKind::Keyword
    } else if lexicon::is_type(word) {
        TokenKind::Type
    } else if lexicon::is_builtin(word) {
        TokenKind::Builtin
    } else {
        TokenKind::Identifier
    }
}

fn first_char_len(rest: &str) -> usize {
    rest.chars().next().map_or(0, char::len_utf8)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `/* ... */` up to the first `*/` (or end of input), or `//` up to the line end.
fn scan_comment(rest: &str) -> usize {
    if let Some(body) = rest.strip_prefix("/*") {
        match body.find("*/") {
            Some(end) => 2 + end + 2,
            None => rest.len(),
        }
    } else if rest.starts_with("//") {
        rest.find(is_line_terminator).unwrap_or(rest.len())
    } else {
        0
    }
}

/// Double-quoted string; a backslash escapes the following character.
/// An unterminated string runs to the end of input.
fn scan_string(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'"') {
        return 0;
    }

    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return i + 1,
            b'\\' => i += 1 + first_char_len(&rest[i + 1..]),
            _ => i += 1,
        }
    }
    rest.len()
}

/// `#` through the end of the line, excluding the newline.
fn scan_preprocessor(rest: &str) -> usize {
    if !rest.starts_with('#') {
        return 0;
    }
    rest.find('\n').unwrap_or(rest.len())
}

/// `digits[.digits][(e|E)[+|-]digits][u|U|f|F]`
fn scan_number(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut i = count_digits(bytes);
    if i == 0 {
        return 0;
    }

    if bytes.get(i) == Some(&b'.') {
        let fraction = count_digits(&bytes[i + 1..]);
        if fraction > 0 {
            i += 1 + fraction;
        }
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exponent = count_digits(&bytes[j..]);
        if exponent > 0 {
            i = j + exponent;
        }
    }

    if matches!(bytes.get(i), Some(b'u' | b'U' | b'f' | b'F')) {
        i += 1;
    }
    i
}

fn scan_identifier(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {
            1 + bytes[1..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count()
        }
        _ => 0,
    }
}

fn scan_whitespace(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(rest.len(), |(i, _)| i)
}

/// Arithmetic, bitwise, logical and comparison operators with an optional
/// trailing `=`, or a lone ternary `?` / `:`.
fn scan_operator(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    match bytes.first() {
        Some(b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'&' | b'|' | b'^' | b'!' | b'<' | b'>') => {
            if bytes.get(1) == Some(&b'=') {
                2
            } else {
                1
            }
        }
        Some(b'?' | b':') => 1,
        _ => 0,
    }
}

fn scan_punctuation(rest: &str) -> usize {
    match rest.as_bytes().first() {
        Some(b';' | b',' | b'(' | b')' | b'[' | b']' | b'{' | b'}' | b'.') => 1,
        _ => 0,
    }
}

fn scan_unknown(rest: &str) -> usize {
    first_char_len(rest)
}
