//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Expression statements (the only statement form)
//! - Expression parsing (binary ops, number literals, grouping)
//! - Error accumulation and best-effort recovery
//!
//! The parser uses NUD (null denotation) and LED (left denotation)
//! functions for expression parsing with precedence levels as the binding
//! power.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
