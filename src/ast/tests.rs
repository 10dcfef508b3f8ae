//! Unit tests for the AST debug view.
//!
//! The round-trip property: serializing a tree and re-inspecting the JSON
//! must reproduce the exact shape and literal values it was built from.

use serde_json::json;

use super::ast::{
    Expression, ExpressionStatement, InfixExpression, NumberLiteral, Program, Statement,
};

fn number(value: i64) -> Expression {
    Expression::Number(NumberLiteral { value })
}

fn infix(left: Expression, operator: &str, right: Expression) -> Expression {
    Expression::Infix(InfixExpression {
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
    })
}

#[test]
fn test_number_literal_debug_json() {
    let expr = number(42);

    assert_eq!(expr.debug_json(), json!({ "NumberLiteral": { "value": 42 } }));
}

#[test]
fn test_infix_expression_debug_json() {
    let expr = infix(number(1), "+", number(2));

    assert_eq!(
        expr.debug_json(),
        json!({
            "InfixExpression": {
                "left": { "NumberLiteral": { "value": 1 } },
                "operator": "+",
                "right": { "NumberLiteral": { "value": 2 } },
            }
        })
    );
}

#[test]
fn test_program_debug_json_round_trip() {
    let program = Program {
        statements: vec![Statement::Expression(ExpressionStatement {
            expression: infix(infix(number(1), "-", number(2)), "-", number(3)),
        })],
    };

    let value = program.debug_json();
    let statements = &value["Program"]["statements"];
    assert_eq!(statements.as_array().unwrap().len(), 1);

    let outer = &statements[0]["ExpressionStatement"]["expression"]["InfixExpression"];
    assert_eq!(outer["operator"], "-");
    assert_eq!(outer["right"]["NumberLiteral"]["value"], 3);

    let inner = &outer["left"]["InfixExpression"];
    assert_eq!(inner["operator"], "-");
    assert_eq!(inner["left"]["NumberLiteral"]["value"], 1);
    assert_eq!(inner["right"]["NumberLiteral"]["value"], 2);
}

#[test]
fn test_empty_program_debug_json() {
    let program = Program { statements: vec![] };

    assert_eq!(
        program.debug_json(),
        json!({ "Program": { "statements": [] } })
    );
}
