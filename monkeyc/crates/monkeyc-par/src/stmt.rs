//! Statement parsing.
//!
//! Statements dispatch on the current token: `let` and `return` have
//! dedicated forms, everything else is an expression statement. A
//! trailing semicolon is optional for all three, which is what lets the
//! REPL accept a bare `x + y`.

use monkeyc_lex::TokenKind;

use crate::ast::{Block, ExprStmt, Ident, LetStmt, ReturnStmt, Stmt};
use crate::{Parser, Precedence};

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> Option<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expression>;`
    fn parse_let_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Ident {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Let(LetStmt { token, name, value }))
    }

    /// `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Return(ReturnStmt { token, value }))
    }

    /// A bare expression in statement position.
    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let token = self.current.clone();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.advance();
        }

        Some(Stmt::Expr(ExprStmt { token, expr }))
    }

    /// `{ <statements> }` - used by if expressions and function bodies.
    ///
    /// Statements that fail inside a block are recovered like at top
    /// level: skip to the next boundary, consume it when it is a
    /// semicolon, and leave a closing brace in place to end the block.
    /// The block ends at `}` or at `Eof` for unterminated input.
    pub(crate) fn parse_block_statement(&mut self) -> Block {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.advance();

        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => {
                    statements.push(statement);
                    self.advance();
                }
                None => {
                    self.recover_to_statement_boundary();
                    if self.current_is(TokenKind::Semicolon) {
                        self.advance();
                    }
                }
            }
        }

        Block { token, statements }
    }
}
