//! Lexer implementation, split by concern.
//!
//! `core` holds the `Lexer` struct and the dispatch loop; the sibling
//! modules add the per-category lexing methods.

mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::Lexer;
