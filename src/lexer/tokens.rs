use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("printf");
        set.insert("return");
        set.insert("germ");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    NumberLiteral,
    Keyword,
    Identifier,

    Equal,
    Plus,
    Minus,
    Star,
    Slash,

    LeftParen,
    RightParen,
    Comma,
    SemiColon,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An immutable (kind, lexeme) pair. The lexeme is the exact source
/// substring the token was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.kind, self.lexeme)
    }
}
