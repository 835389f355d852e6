//! Integer literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a run of decimal digits into an `Int` token.
    ///
    /// The literal keeps the source text; converting it to a value (and
    /// rejecting out-of-range literals) is the parser's job. The reader
    /// stops on the first non-digit byte, so there is no trailing
    /// advance here.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        Token::new(TokenKind::Int, self.cursor.slice_from(self.token_start))
    }
}
