//! Lexical analysis for Corgi source files.
//!
//! This module contains the scanner that converts source text into a
//! sequence of tokens for parsing. It handles:
//!
//! - Character-by-character scanning with one character of lookahead
//! - Symbols, words (identifiers, keywords and numbers) and string literals
//! - Comment markers and newlines
//! - Token position tracking for error reporting

pub mod cursor;
pub mod lexer;
pub mod tokens;
