//! Token definitions for the Monkey language.
//!
//! A token pairs a kind drawn from a closed enumeration with the literal
//! source text it was read from. The kind drives all parser dispatch; the
//! literal survives into AST nodes and error messages.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The closed set of token kinds.
///
/// `Display` renders the stable name used in parser error messages:
/// keywords and the literal classes render as their upper-case name,
/// punctuation renders as its surface text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character the lexer does not recognize
    Illegal,
    /// End of input; repeats forever once reached
    Eof,

    /// Identifier (variable or function name)
    Ident,
    /// Integer literal
    Int,

    /// "="
    Assign,
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Asterisk,
    /// "/"
    Slash,
    /// "!"
    Bang,

    /// "<"
    Lt,
    /// ">"
    Gt,
    /// "=="
    Eq,
    /// "!="
    NotEq,

    /// ","
    Comma,
    /// ";"
    Semicolon,

    /// "("
    LParen,
    /// ")"
    RParen,
    /// "{"
    LBrace,
    /// "}"
    RBrace,

    /// "fn"
    Function,
    /// "let"
    Let,
    /// "if"
    If,
    /// "else"
    Else,
    /// "return"
    Return,
    /// "true"
    True,
    /// "false"
    False,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        };
        f.write_str(name)
    }
}

/// A single lexical unit: a kind plus the surface text it was read from.
///
/// Tokens are immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Syntactic category; drives parser dispatch
    pub kind: TokenKind,
    /// The source text of the token
    pub literal: String,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token; its literal is empty
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

/// Fixed mapping from keyword spelling to token kind.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("fn", TokenKind::Function);
    m.insert("let", TokenKind::Let);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m.insert("return", TokenKind::Return);
    m.insert("true", TokenKind::True);
    m.insert("false", TokenKind::False);
    m
});

/// Returns the keyword kind for `ident`, or [`TokenKind::Ident`] when the
/// word is not reserved.
///
/// # Examples
///
/// ```
/// use monkeyc_lex::{lookup_ident, TokenKind};
///
/// assert_eq!(lookup_ident("fn"), TokenKind::Function);
/// assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
/// ```
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keywords() {
        assert_eq!(lookup_ident("fn"), TokenKind::Function);
        assert_eq!(lookup_ident("let"), TokenKind::Let);
        assert_eq!(lookup_ident("if"), TokenKind::If);
        assert_eq!(lookup_ident("else"), TokenKind::Else);
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("true"), TokenKind::True);
        assert_eq!(lookup_ident("false"), TokenKind::False);
    }

    #[test]
    fn test_lookup_non_keywords() {
        assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
        assert_eq!(lookup_ident("lets"), TokenKind::Ident);
        assert_eq!(lookup_ident("function"), TokenKind::Ident);
        assert_eq!(lookup_ident("_"), TokenKind::Ident);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup_ident("Let"), TokenKind::Ident);
        assert_eq!(lookup_ident("TRUE"), TokenKind::Ident);
    }

    #[test]
    fn test_kind_display_literal_classes() {
        assert_eq!(TokenKind::Illegal.to_string(), "ILLEGAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Int.to_string(), "INT");
        assert_eq!(TokenKind::Let.to_string(), "LET");
        assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    }

    #[test]
    fn test_kind_display_punctuation() {
        assert_eq!(TokenKind::Assign.to_string(), "=");
        assert_eq!(TokenKind::Eq.to_string(), "==");
        assert_eq!(TokenKind::NotEq.to_string(), "!=");
        assert_eq!(TokenKind::LParen.to_string(), "(");
        assert_eq!(TokenKind::RBrace.to_string(), "}");
        assert_eq!(TokenKind::Semicolon.to_string(), ";");
    }

    #[test]
    fn test_eof_token_has_empty_literal() {
        let token = Token::eof();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Ident, "five");
        assert_eq!(token.to_string(), "IDENT \"five\"");
    }
}
