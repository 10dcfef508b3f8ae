use crate::{
    ast::ast::{Expression, InfixExpression, NumberLiteral},
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Precedence climbing. Handlers leave the cursor on the last token of
/// their (sub)expression; the loop below inspects the peek token.
pub fn parse_expr(parser: &mut Parser<'_>, min_bp: Precedence) -> Result<Expression, ParseError> {
    // First parse NUD
    let token_kind = parser
        .current_token_kind()
        .ok_or(ParseError::UnexpectedEndOfInput)?;
    let nud_fn = parser
        .get_nud_lookup()
        .get(&token_kind)
        .copied()
        .ok_or(ParseError::NoPrefixHandler { kind: token_kind })?;

    let mut left = nud_fn(parser)?;

    // While a LED exists and the peek token binds tighter than the floor,
    // keep absorbing infix operators into the lhs.
    while let Some(peek_kind) = parser.peek_token_kind() {
        if peek_kind == TokenKind::SemiColon || parser.precedence_of(peek_kind) <= min_bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&peek_kind).copied() else {
            break;
        };

        parser.advance();
        left = led_fn(parser, left)?;
    }

    Ok(left)
}

pub fn parse_number_expr(parser: &mut Parser<'_>) -> Result<Expression, ParseError> {
    let token = parser
        .current_token()
        .ok_or(ParseError::UnexpectedEndOfInput)?;

    let value = token
        .lexeme
        .parse::<i64>()
        .map_err(|_| ParseError::LiteralConversionFailure {
            lexeme: token.lexeme.clone(),
        })?;

    Ok(Expression::Number(NumberLiteral { value }))
}

pub fn parse_infix_expr(parser: &mut Parser<'_>, left: Expression) -> Result<Expression, ParseError> {
    let (operator_kind, operator) = {
        let token = parser
            .current_token()
            .ok_or(ParseError::UnexpectedEndOfInput)?;
        (token.kind, token.lexeme.clone())
    };

    // The operator's own precedence becomes the new floor, so a following
    // operator of equal precedence binds left.
    let precedence = parser.precedence_of(operator_kind);
    parser.advance();
    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser<'_>) -> Result<Expression, ParseError> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RightParen)?;

    Ok(expr)
}
