pub mod lexicon;
pub mod token;
pub mod tokenizer;

pub use lexicon::{is_builtin, is_keyword, is_type};
pub use token::{Token, TokenKind};
pub use tokenizer::{classify_identifier, tokenize, Tokenizer};
