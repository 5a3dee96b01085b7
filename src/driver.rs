//! Reads a source file, scans it and renders the result.
//!
//! This is the layer between the command line and the scanner: it checks that
//! the input path names a regular file, reads it, and turns the token list or
//! the scan failure into printable text. Printing itself is left to the caller.

use std::{fs, path::Path};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::{Config, OutputFormat},
    errors::errors::{DriverError, Result},
    lexer::{lexer::scan_partial, tokens::Token},
    render_error,
};

/// A token as written by the `json` output format.
#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: &'static str,
    text: Option<String>,
    start: u32,
    end: u32,
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        TokenRecord {
            kind: token.kind.name(),
            text: token.kind.text(),
            start: token.span.start.0,
            end: token.span.end.0,
        }
    }
}

/// Fails unless `path` names an existing regular file.
pub fn check_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(DriverError::MissingFile(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(DriverError::NotAFile(path.to_path_buf()));
    }

    Ok(())
}

/// Scans the file named by `config` and returns the rendered token list.
///
/// A scan failure comes back as [`DriverError::Scan`], carrying the rendered
/// diagnostic and the tokens scanned before it.
pub fn run(config: &Config) -> Result<String> {
    check_input(&config.path)?;

    let source = fs::read_to_string(&config.path)?;
    debug!(path = %config.path.display(), bytes = source.len(), "read source file");

    let file_name = config.path.display().to_string();
    let (tokens, error) = scan_partial(&source, Some(file_name));

    match error {
        None => {
            info!(count = tokens.len(), "scanned source file");
            render_tokens(&tokens, config.format)
        }
        Some(error) => {
            debug!(scanned = tokens.len(), "scan failed: {}", error);
            Err(DriverError::Scan {
                rendered: render_error(&error, &source),
                error,
                partial: tokens,
            })
        }
    }
}

pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Debug => {
            let kinds = tokens.iter().map(|token| &token.kind).collect::<Vec<_>>();
            Ok(format!("{:?}\n", kinds))
        }
        OutputFormat::Lines => Ok(tokens.iter().map(|token| format!("{}\n", token)).collect()),
        OutputFormat::Json => {
            let records = tokens.iter().map(TokenRecord::from).collect::<Vec<_>>();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        }
    }
}
