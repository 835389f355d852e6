//! monkeyc-par - Pratt parser for the Monkey language.
//!
//! The parser consumes tokens from a [`monkeyc_lex::Lexer`] with
//! one-token lookahead and produces a [`ast::Program`]. Expression
//! parsing uses Pratt parsing (top-down operator precedence): every
//! token kind may have a prefix role (it can begin an expression) and an
//! infix role (it can bind an existing left-hand expression to a
//! right-hand one), and a precedence threshold controls how far the
//! recursion reaches.
//!
//! # Operator precedence (lowest to highest)
//!
//! | Level       | Operators        | Associativity |
//! |-------------|------------------|---------------|
//! | Equals      | `==`, `!=`       | Left          |
//! | LessGreater | `<`, `>`         | Left          |
//! | Sum         | `+`, `-`         | Left          |
//! | Product     | `*`, `/`         | Left          |
//! | Prefix      | unary `!`, `-`   | Prefix        |
//! | Call        | `f(...)`         | Left          |
//!
//! # Error handling
//!
//! Errors are accumulated, never thrown. A failed statement yields no
//! AST node; the parser skips to the next statement boundary and keeps
//! going until `Eof`, so one pass reports every problem it can find.
//! Callers must inspect [`Parser::errors`] after
//! [`Parser::parse_program`]: a non-empty list means the AST may be
//! partial and must not be trusted.

use monkeyc_lex::{Lexer, Token, TokenKind};
use monkeyc_util::{Diagnostic, Handler};

pub mod ast;

mod expr;
mod stmt;

pub use expr::Precedence;

/// Pratt parser over a streaming lexer.
///
/// The parser uniquely owns its lexer for the duration of the parse and
/// retains at most two tokens: `current` and `peek`.
pub struct Parser<'a> {
    /// Token source; pulled one token at a time
    lexer: Lexer<'a>,

    /// The token being parsed
    current: Token,

    /// One-token lookahead
    peek: Token,

    /// Accumulated diagnostics
    handler: Handler,
}

impl<'a> Parser<'a> {
    /// Create a new parser, priming `current` and `peek` from the lexer.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            handler: Handler::new(),
        };

        // Two advances so that both cached tokens are real
        parser.advance();
        parser.advance();

        parser
    }

    /// Parse a complete program.
    ///
    /// Statements that fail to parse are skipped, not appended; their
    /// errors are recorded on the handler.
    pub fn parse_program(&mut self) -> ast::Program {
        let mut statements = Vec::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => self.recover_to_statement_boundary(),
            }
            self.advance();
        }

        ast::Program { statements }
    }

    /// The accumulated error messages, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.handler.messages()
    }

    /// The underlying diagnostic handler.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Shift the token window: `current` takes `peek`, `peek` takes the
    /// lexer's next token.
    pub(crate) fn advance(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advance past the peek token if it has the expected kind.
    ///
    /// On a mismatch, records exactly one error and leaves the window
    /// unchanged. This is the only error-reporting path in statement
    /// parsing.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.error(format!(
                "expected next token to be {}, got {} instead",
                kind, self.peek.kind
            ));
            false
        }
    }

    pub(crate) fn error(&mut self, message: String) {
        self.handler.emit_diagnostic(Diagnostic::error(message));
    }

    /// Skip to the next statement boundary after a failed statement.
    ///
    /// Stops with `current` on a semicolon, a closing brace, or `Eof`,
    /// so recovery never eats past the end of an enclosing block.
    /// Callers decide whether the boundary token itself is consumed:
    /// the top loop's unconditional advance moves past it, while block
    /// parsing leaves a closing brace in place to end the block.
    pub(crate) fn recover_to_statement_boundary(&mut self) {
        while !self.current_is(TokenKind::Semicolon)
            && !self.current_is(TokenKind::RBrace)
            && !self.current_is(TokenKind::Eof)
        {
            self.advance();
        }
    }
}
