//! Identifier and keyword lexing.

use crate::token::{lookup_ident, Token};
use crate::Lexer;

/// Identifier-start class: ASCII letters and underscore.
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier-continue class; identical to the start class, digits are
/// not part of identifiers in this grammar.
pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c)
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Greedily reads the identifier-character run, then looks the word
    /// up in the keyword table. The reader already stops on the first
    /// non-identifier byte, so there is no trailing advance here.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);

        Token::new(lookup_ident(text), text)
    }
}
