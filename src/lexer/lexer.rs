use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                // Word runs come first so `abc123` stays one lexeme.
                RegexPattern { regex: Regex::new("[a-zA-Z0-9_]+").unwrap(), handler: word_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equal, "=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SemiColon, ";") },
            ],
            source,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> String {
        self.source.as_bytes()[self.pos..]
            .iter()
            .map(|b| *b as char)
            .collect()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn word_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder();
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    // Classification order: keyword, then all-digits, then identifier.
    let kind = if RESERVED_LOOKUP.contains(matched.as_str()) {
        TokenKind::Keyword
    } else if matched.bytes().all(|b| b.is_ascii_digit()) {
        TokenKind::NumberLiteral
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(kind, matched.clone()));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder();
    let matched = regex.find(&remaining).unwrap().end();
    lexer.advance_n(matched);
}

/// Scans the source left to right in a single pass and returns the token
/// stream. No end-of-stream token is appended; callers track the length.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let patterns = lex.patterns.clone();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let remaining = lex.remainder();
            let match_here = pattern.regex.find(&remaining);

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        // Anything unrecognised is dropped without a token.
        if !matched {
            lex.advance_n(1);
        }
    }

    lex.tokens
}
