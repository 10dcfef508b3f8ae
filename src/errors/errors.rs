use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Diagnostics recorded during a parse.
///
/// None of these abort the top-level parse loop; each marks the offending
/// subtree absent and the parser continues with subsequent statements.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixHandler { kind: TokenKind },
    #[error("could not parse {lexeme:?} as integer")]
    LiteralConversionFailure { lexeme: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

impl ParseError {
    pub fn get_error_name(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::NoPrefixHandler { .. } => "NoPrefixHandler",
            ParseError::LiteralConversionFailure { .. } => "LiteralConversionFailure",
            ParseError::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }
}
