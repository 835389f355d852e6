//! Operator and punctuation lexing.
//!
//! This module handles single-character punctuation and the two
//! composite operators that need one-character lookahead.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Emits a token for the single character at the cursor and advances
    /// past it.
    pub(crate) fn single_char(&mut self, kind: TokenKind) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        Token::new(kind, c.to_string())
    }

    /// Lexes assign or equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::new(TokenKind::Eq, "==")
        } else {
            Token::new(TokenKind::Assign, "=")
        }
    }

    /// Lexes bang or not-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Token::new(TokenKind::NotEq, "!=")
        } else {
            Token::new(TokenKind::Bang, "!")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};

    fn lex_op(source: &str) -> Token {
        let mut lexer = crate::Lexer::new(source);
        lexer.next_token()
    }

    #[test]
    fn test_plus() {
        assert_eq!(lex_op("+"), Token::new(TokenKind::Plus, "+"));
    }

    #[test]
    fn test_minus() {
        assert_eq!(lex_op("-"), Token::new(TokenKind::Minus, "-"));
    }

    #[test]
    fn test_asterisk() {
        assert_eq!(lex_op("*"), Token::new(TokenKind::Asterisk, "*"));
    }

    #[test]
    fn test_slash() {
        assert_eq!(lex_op("/"), Token::new(TokenKind::Slash, "/"));
    }

    #[test]
    fn test_assign() {
        assert_eq!(lex_op("="), Token::new(TokenKind::Assign, "="));
    }

    #[test]
    fn test_eq() {
        assert_eq!(lex_op("=="), Token::new(TokenKind::Eq, "=="));
    }

    #[test]
    fn test_bang() {
        assert_eq!(lex_op("!"), Token::new(TokenKind::Bang, "!"));
    }

    #[test]
    fn test_not_eq() {
        assert_eq!(lex_op("!="), Token::new(TokenKind::NotEq, "!="));
    }

    #[test]
    fn test_lt() {
        assert_eq!(lex_op("<"), Token::new(TokenKind::Lt, "<"));
    }

    #[test]
    fn test_gt() {
        assert_eq!(lex_op(">"), Token::new(TokenKind::Gt, ">"));
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(lex_op(","), Token::new(TokenKind::Comma, ","));
        assert_eq!(lex_op(";"), Token::new(TokenKind::Semicolon, ";"));
        assert_eq!(lex_op("("), Token::new(TokenKind::LParen, "("));
        assert_eq!(lex_op(")"), Token::new(TokenKind::RParen, ")"));
        assert_eq!(lex_op("{"), Token::new(TokenKind::LBrace, "{"));
        assert_eq!(lex_op("}"), Token::new(TokenKind::RBrace, "}"));
    }

    #[test]
    fn test_assign_then_not_eq() {
        // "=!=" is assign followed by not-equals, not "==" then "!"
        let mut lexer = crate::Lexer::new("=!=");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Assign, "="));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::NotEq, "!="));
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_adjacent_composites() {
        let mut lexer = crate::Lexer::new("==!=");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Eq, "=="));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::NotEq, "!="));
    }

    #[test]
    fn test_bang_before_ident() {
        let mut lexer = crate::Lexer::new("!ok");
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Bang, "!"));
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "ok"));
    }
}
