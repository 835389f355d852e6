//! Expression parsing using Pratt parsing (top-down operator precedence).
//!
//! The core loop lives in [`Parser::parse_expression`]: parse a prefix
//! expression as the left-hand side, then, while the upcoming token
//! binds tighter than the caller's threshold, fold it into a new
//! left-hand side with its infix handler. Equal-precedence operators
//! fail the strict `<` comparison against their own level, which is
//! what makes them nest left: `a + b + c` parses as `((a + b) + c)`.
//!
//! Dispatch is a `match` over the token kind rather than a table of
//! function pointers; the set of kinds is closed, so exhaustiveness is
//! checked statically and the calls inline.

use monkeyc_lex::TokenKind;

use crate::ast::{
    BoolLit, CallExpr, Expr, FnLit, Ident, IfExpr, InfixExpr, IntLit, PrefixExpr,
};
use crate::Parser;

/// Binding strength of an expression position, lowest first.
///
/// The ordering is total; the parser only ever compares levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Start of an expression
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Unary `!`, `-`
    Prefix,
    /// `f(...)`
    Call,
}

impl Precedence {
    /// The infix binding strength of a token kind.
    ///
    /// Kinds with no infix role sit at `Lowest`, which can never win the
    /// strict comparison in the parse loop.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

impl<'a> Parser<'a> {
    /// Parse one expression at the given precedence threshold.
    ///
    /// Returns `None` after recording an error; partial right-hand sides
    /// are dropped with their statement.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            match self.peek.kind {
                TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Asterisk
                | TokenKind::Slash
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Eq
                | TokenKind::NotEq => {
                    self.advance();
                    left = self.parse_infix_expression(left)?;
                }
                TokenKind::LParen => {
                    self.advance();
                    left = self.parse_call_expression(left)?;
                }
                // No infix role: hand the expression back unchanged
                _ => return Some(left),
            }
        }

        Some(left)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Dispatch on the token that begins an expression.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => {
                self.error(format!("no prefix parse function for {} found", kind));
                None
            }
        }
    }

    fn parse_identifier(&mut self) -> Expr {
        Expr::Ident(Ident {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        })
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Int(IntLit { token, value })),
            Err(_) => {
                self.error(format!("could not parse {} as integer", token.literal));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Expr {
        Expr::Bool(BoolLit {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        })
    }

    /// `!<expr>` or `-<expr>`; the operand binds at `Prefix` strength.
    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix(PrefixExpr {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    /// Binary operator: the right-hand side parses at the operator's own
    /// precedence, so equal levels associate left.
    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix(InfixExpr {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    /// `( <expr> )` - grouping shapes the tree and then disappears; the
    /// inner expression is returned unwrapped.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expr)
    }

    /// `if (<cond>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If(IfExpr {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// `fn(<params>) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expr> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::Fn(FnLit {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Ident>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        self.advance();
        parameters.push(Ident {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        });

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            parameters.push(Ident {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// `<callee>(<args>)` - `(` in infix position is a call.
    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expr::Call(CallExpr {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expr>> {
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.advance();
            return Some(arguments);
        }

        self.advance();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(arguments)
    }
}

// =============================================================================
// TESTS
// =============================================================================
