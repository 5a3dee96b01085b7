use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

/// Characters that always form a token of their own and end any word.
pub const SYMBOLS: &str = "(){}[]+-*/%.,~!|&^";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("function", TokenKind::Keyword);
        map
    };
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Whitespace and symbols end a word without being consumed by it.
pub fn is_word_delimiter(c: char) -> bool {
    c.is_whitespace() || is_symbol(c)
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Comment,
    Symbol(char),
    String(String), // includes both quotes
    Number(String),
    Keyword,
    Identifier(String),
    Newline,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::String(_) => "string",
            TokenKind::Number(_) => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Newline => "newline",
        }
    }

    /// The text payload, if this kind carries one. Symbols report their
    /// character as text.
    pub fn text(&self) -> Option<String> {
        match self {
            TokenKind::Symbol(c) => Some(c.to_string()),
            TokenKind::String(text) | TokenKind::Number(text) | TokenKind::Identifier(text) => {
                Some(text.clone())
            }
            TokenKind::Comment | TokenKind::Keyword | TokenKind::Newline => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{} ({})", self.name(), text),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Token {
    pub fn len(&self) -> u32 {
        self.span.end.0 - self.span.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
