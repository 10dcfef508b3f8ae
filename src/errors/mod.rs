//! Error types for the front end.
//!
//! This module defines the diagnostics produced while parsing. Lexing has
//! no error channel; parse failures are accumulated as values rather than
//! unwinding, so a parse always completes.

pub mod errors;

#[cfg(test)]
mod tests;
