use std::collections::HashMap;

use crate::{ast::ast::Expression, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Operator precedence levels, lowest to highest. Only Sum and Product are
/// registered by this grammar; unregistered kinds query to Lowest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

pub type NudHandler = fn(&mut Parser<'_>) -> Result<Expression, ParseError>;
pub type LedHandler = fn(&mut Parser<'_>, Expression) -> Result<Expression, ParseError>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    // Literals and grouping
    parser.nud(TokenKind::NumberLiteral, parse_number_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NudLookup = HashMap<TokenKind, NudHandler>;
pub type LedLookup = HashMap<TokenKind, LedHandler>;
pub type BpLookup = HashMap<TokenKind, Precedence>;
