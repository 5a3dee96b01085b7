//! Settings for a single run of the command-line driver.

use std::path::PathBuf;

use clap::ValueEnum;

/// How the scanned tokens are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The debug representation of the whole token list
    #[default]
    Debug,
    /// One token per line
    Lines,
    /// A JSON array of tokens with their byte offsets
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Source file to scan.
    pub path: PathBuf,

    pub format: OutputFormat,

    /// Print the tokens scanned before a failure.
    pub partial: bool,

    pub verbose: bool,

    /// Colored log output.
    pub color: bool,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Config {
            path: path.into(),
            format: OutputFormat::default(),
            partial: false,
            verbose: false,
            color: true,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
