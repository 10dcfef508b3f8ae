use crate::{ast::ast::{ExpressionStatement, Statement}, errors::errors::ParseError};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

/// The grammar has exactly one statement form: an expression statement.
/// No semicolon is consumed or required here.
pub fn parse_stmt(parser: &mut Parser<'_>) -> Result<Statement, ParseError> {
    let expression = parse_expr(parser, Precedence::Lowest)?;

    Ok(Statement::Expression(ExpressionStatement { expression }))
}
