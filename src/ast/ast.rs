use serde_json::{json, Value};

/// The parse root. Owns all statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
}

/// Wraps a top-level expression. The only statement form the grammar has.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(NumberLiteral),
    Infix(InfixExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl Program {
    /// Serializes the tree to its structured debug representation, keyed
    /// by node-type name.
    pub fn debug_json(&self) -> Value {
        json!({
            "Program": {
                "statements": self
                    .statements
                    .iter()
                    .map(Statement::debug_json)
                    .collect::<Vec<Value>>(),
            }
        })
    }
}

impl Statement {
    pub fn debug_json(&self) -> Value {
        match self {
            Statement::Expression(stmt) => json!({
                "ExpressionStatement": {
                    "expression": stmt.expression.debug_json(),
                }
            }),
        }
    }
}

impl Expression {
    pub fn debug_json(&self) -> Value {
        match self {
            Expression::Number(number) => json!({
                "NumberLiteral": {
                    "value": number.value,
                }
            }),
            Expression::Infix(infix) => json!({
                "InfixExpression": {
                    "left": infix.left.debug_json(),
                    "operator": infix.operator,
                    "right": infix.right.debug_json(),
                }
            }),
        }
    }
}
