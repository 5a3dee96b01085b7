use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::EndOfInput)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EndOfInput => "EndOfInput",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnsupportedFeature { .. } => "UnsupportedFeature",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EndOfInput => ErrorTip::None,
            ErrorImpl::UnexpectedCharacter { expected, actual } => ErrorTip::Suggestion(format!(
                "expected `{}`, found `{}`",
                expected,
                actual.escape_default()
            )),
            ErrorImpl::UnsupportedFeature { feature } => {
                ErrorTip::Suggestion(format!("{} are not supported", feature))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.1, self.position.0
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected end of input")]
    EndOfInput,
    #[error("unexpected character: expected {expected:?}, found {actual:?}")]
    UnexpectedCharacter { expected: char, actual: char },
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature { feature: String },
}

/// Failures of the command-line driver, wrapping scan errors together with
/// everything needed to report them.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("'{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `partial` holds the tokens scanned before `error`.
    #[error("{error}")]
    Scan {
        error: Error,
        rendered: String,
        partial: Vec<Token>,
    },
}

pub type Result<T> = std::result::Result<T, DriverError>;
