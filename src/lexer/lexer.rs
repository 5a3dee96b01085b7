use std::{iter::FusedIterator, rc::Rc};

use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    tokens::{is_symbol, is_word_delimiter, Token, TokenKind, RESERVED_LOOKUP},
};

const ESCAPE_SEQUENCES: &str = "string escape sequences";

/// Turns a source string into tokens, one at a time.
///
/// Iterating a `Scanner` yields tokens until the input runs out at a token
/// boundary, and stops after the first error.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str, file: Option<String>) -> Scanner<'src> {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("shell")));

        Scanner {
            cursor: Cursor::new(source, file_name),
            finished: false,
        }
    }

    /// Scans the next token.
    ///
    /// Running out of input fails with `EndOfInput` whether it happens between
    /// tokens or in the middle of one; iterate the scanner to tell the two apart.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.scan_token()? {
            Some(token) => Ok(token),
            None => Err(Error::new(ErrorImpl::EndOfInput, self.cursor.position())),
        }
    }

    /// `Ok(None)` means the input ended cleanly before another token started.
    fn scan_token(&mut self) -> Result<Option<Token>, Error> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(None);
            }

            let start = self.cursor.position();
            let c = self.cursor.advance()?;

            let kind = match c {
                '/' => {
                    self.expect('/')?;
                    TokenKind::Comment
                }
                c if is_symbol(c) => TokenKind::Symbol(c),
                '"' => TokenKind::String(self.read_string(c)?),
                c if c.is_ascii_digit() => TokenKind::Number(self.read_word(c)),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let word = self.read_word(c);
                    match RESERVED_LOOKUP.get(word.as_str()) {
                        Some(kind) => kind.clone(),
                        None => TokenKind::Identifier(word),
                    }
                }
                '\n' => TokenKind::Newline,
                // whitespace and anything unrecognised
                _ => continue,
            };

            let token = MK_TOKEN!(
                kind,
                Span {
                    start,
                    end: self.cursor.position()
                }
            );
            trace!(offset = token.span.start.0, "scanned {}", token);

            return Ok(Some(token));
        }
    }

    /// Reads `first` and everything after it up to the next whitespace or
    /// symbol, leaving that delimiter unread.
    pub fn read_word(&mut self, first: char) -> String {
        let mut word = String::from(first);

        while let Some(c) = self.cursor.next_if(|c| !is_word_delimiter(c)) {
            word.push(c);
        }

        word
    }

    fn read_string(&mut self, quote: char) -> Result<String, Error> {
        let mut text = String::from(quote);

        loop {
            let position = self.cursor.position();
            let c = self.cursor.advance()?;

            match c {
                '\\' => {
                    return Err(Error::new(
                        ErrorImpl::UnsupportedFeature {
                            feature: String::from(ESCAPE_SEQUENCES),
                        },
                        position,
                    ))
                }
                '"' => {
                    text.push(c);
                    return Ok(text);
                }
                _ => text.push(c),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<char, Error> {
        let position = self.cursor.position();
        let actual = self.cursor.advance()?;

        if actual == expected {
            Ok(actual)
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedCharacter { expected, actual },
                position,
            ))
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.scan_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans all of `source`, failing on the first malformed token.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    Scanner::new(source, file).collect()
}

/// Scans `source` like [`tokenize`], but keeps the tokens produced before a
/// failure.
pub fn scan_partial(source: &str, file: Option<String>) -> (Vec<Token>, Option<Error>) {
    let mut tokens = vec![];

    for result in Scanner::new(source, file) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => return (tokens, Some(error)),
        }
    }

    (tokens, None)
}
