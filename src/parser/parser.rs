//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry
//! point. The parser uses a Pratt parser approach with NUD/LED handlers
//! for expression parsing.
//!
//! It maintains lookup tables for:
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix positions
//! - Precedence levels for operator binding power

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{create_token_lookups, BpLookup, LedHandler, LedLookup, NudHandler, NudLookup, Precedence},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct borrows the token stream for the lifetime of one parse and
/// tracks a cursor position into it. The current and peek tokens are
/// derived from the cursor, never stored duplicates. Diagnostics
/// accumulate in order; nothing here panics or unwinds.
pub struct Parser<'a> {
    /// The token stream to parse, borrowed read-only
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NudLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LedLookup,
    /// Lookup table for operator precedence
    binding_power_lookup: BpLookup,
    /// Ordered list of diagnostics recorded so far
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser instance over a borrowed token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            tokens,
            pos: 0,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            errors: vec![],
        }
    }

    /// Returns the token at the cursor, or None past the end.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the token at the cursor.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the token one past the cursor, or None.
    pub fn peek_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1)
    }

    /// Returns the kind of the token one past the cursor.
    pub fn peek_token_kind(&self) -> Option<TokenKind> {
        self.peek_token().map(|token| token.kind)
    }

    /// Advances the cursor by one token. The cursor saturates at
    /// one-past-the-end; the derived accessors then return None.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Expects the peek token to be of the given kind and advances onto
    /// it, otherwise returns the mismatch as an error.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        match self.peek_token_kind() {
            Some(kind) if kind == expected => {
                self.advance();
                Ok(())
            }
            Some(kind) => Err(ParseError::UnexpectedToken {
                expected,
                got: kind,
            }),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// Checks if the cursor is still within the token stream.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Returns the precedence registered for a token kind, defaulting to
    /// Lowest for everything unregistered.
    pub fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NudLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LedLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token kind.
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LedHandler) {
        self.binding_power_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token kind.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NudHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Records a diagnostic without interrupting the parse.
    pub fn record_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Returns the diagnostics recorded so far, in order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser
/// instance, initializes the lookup tables, and parses statements until
/// the stream is exhausted.
///
/// Parsing never fails outright: a statement that cannot be parsed is
/// recorded as a diagnostic and left absent, and the loop continues on a
/// best-effort basis with the next statement.
///
/// # Returns
///
/// The (possibly partial) `Program` plus the ordered diagnostics list.
pub fn parse(tokens: &[Token]) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut statements = vec![];

    while parser.has_tokens() {
        // A semicolon separates statements; it is stepped over, never
        // parsed as one.
        if parser.current_token_kind() == Some(TokenKind::SemiColon) {
            parser.advance();
            continue;
        }

        match parse_stmt(&mut parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }

        parser.advance();
    }

    let errors = parser.errors().to_vec();
    (Program { statements }, errors)
}
