//! monkeyc-lex - Lexical analyzer for the Monkey language.
//!
//! The lexer transforms a stream of characters into a stream of tokens,
//! one token per call. It is streaming and single-pass: each call to
//! [`Lexer::next_token`] consumes the smallest prefix of the remaining
//! input that forms a single token.
//!
//! ```text
//! Source: "let five = 5;"
//!
//! Tokens: [Let "let"] [Ident "five"] [Assign "="] [Int "5"] [Semicolon ";"] [Eof ""]
//!         (whitespace elided)
//! ```
//!
//! Two properties the parser relies on:
//!
//! - The token sequence for any finite input ends in an infinite tail of
//!   `Eof` tokens; callers may keep pulling past the end.
//! - Unrecognized characters become `Illegal` tokens rather than aborting
//!   the stream; the parser reports them as syntax errors.

pub mod cursor;
pub mod token;

mod edge_cases;
mod lexer;

pub use lexer::Lexer;
pub use token::{lookup_ident, Token, TokenKind};
