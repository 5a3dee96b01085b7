//! Forward-only character cursor with one character of lookahead.

use std::{iter::Peekable, rc::Rc, str::Chars};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Walks the characters of a source string, tracking the byte offset of the
/// next unread character.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    chars: Peekable<Chars<'src>>,
    pos: u32,
    file: Rc<String>,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str, file: Rc<String>) -> Self {
        Cursor {
            chars: source.chars().peekable(),
            pos: 0,
            file,
        }
    }

    /// The next character, without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Consumes the next character, failing with `EndOfInput` once the source
    /// is exhausted.
    pub fn advance(&mut self) -> Result<char, Error> {
        match self.chars.next() {
            Some(c) => {
                self.pos += c.len_utf8() as u32;
                Ok(c)
            }
            None => Err(Error::new(ErrorImpl::EndOfInput, self.position())),
        }
    }

    /// Consumes the next character only if `func` accepts it.
    pub fn next_if(&mut self, func: impl FnOnce(char) -> bool) -> Option<char> {
        let c = self.chars.next_if(|c| func(*c))?;
        self.pos += c.len_utf8() as u32;
        Some(c)
    }

    pub fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    pub fn position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Cursor;

    fn cursor(source: &str) -> Cursor<'_> {
        Cursor::new(source, Rc::new(String::from("test.cg")))
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = cursor("ab");

        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.position().0, 0);
        assert_eq!(cursor.advance().unwrap(), 'a');
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_advance_past_end() {
        let mut cursor = cursor("x");

        assert_eq!(cursor.advance().unwrap(), 'x');
        assert!(cursor.is_at_end());

        let error = cursor.advance().unwrap_err();
        assert!(error.is_end_of_input());
        assert_eq!(error.get_position().0, 1);
    }

    #[test]
    fn test_offsets_are_bytes() {
        let mut cursor = cursor("é1");

        cursor.advance().unwrap();
        assert_eq!(cursor.position().0, 2);
        cursor.advance().unwrap();
        assert_eq!(cursor.position().0, 3);
    }

    #[test]
    fn test_next_if() {
        let mut cursor = cursor("ab");

        assert_eq!(cursor.next_if(|c| c == 'b'), None);
        assert_eq!(cursor.position().0, 0);
        assert_eq!(cursor.next_if(|c| c == 'a'), Some('a'));
        assert_eq!(cursor.position().0, 1);
    }
}
