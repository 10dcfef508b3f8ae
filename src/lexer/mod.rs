//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a flat stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, number literals, and operators
//! - Whitespace handling
//!
//! Lexing never fails: characters outside the recognized vocabulary are
//! dropped without producing a token.

pub mod lexer;
pub mod tokens;
