//! Unit tests for error handling.
//!
//! This module contains tests for diagnostic names and messages.

use crate::errors::errors::ParseError;
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_error() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::RightParen,
        got: TokenKind::SemiColon,
    };

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be RightParen, got SemiColon instead"
    );
}

#[test]
fn test_no_prefix_handler_error() {
    let error = ParseError::NoPrefixHandler {
        kind: TokenKind::Star,
    };

    assert_eq!(error.get_error_name(), "NoPrefixHandler");
    assert_eq!(error.to_string(), "no prefix parse function for Star found");
}

#[test]
fn test_literal_conversion_failure_error() {
    let error = ParseError::LiteralConversionFailure {
        lexeme: "99999999999999999999".to_string(),
    };

    assert_eq!(error.get_error_name(), "LiteralConversionFailure");
    assert!(error.to_string().contains("99999999999999999999"));
}

#[test]
fn test_unexpected_end_of_input_error() {
    let error = ParseError::UnexpectedEndOfInput;

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.to_string(), "unexpected end of input");
}
