//! AST (Abstract Syntax Tree) module.
//!
//! The tree is a closed sum type: every node kind is a variant of
//! `Statement` or `Expression`, with `Program` as the parse root. Each
//! non-leaf node exclusively owns its children. Every node serializes to a
//! JSON debug view keyed by node-type name.

pub mod ast;

#[cfg(test)]
mod tests;
