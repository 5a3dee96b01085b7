use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corgi::{
    config::{Config, OutputFormat},
    driver::{render_tokens, run},
    errors::errors::DriverError,
};

/// Tokenize a Corgi source file and print its tokens.
#[derive(Parser, Debug)]
#[command(name = "corgi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize a Corgi source file", long_about = None)]
struct Cli {
    /// Source file to scan (usually *.cg)
    path: PathBuf,

    /// How to print the tokens
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Debug, env = "CORGI_FORMAT")]
    format: OutputFormat,

    /// On a scan failure, still print the tokens scanned before it
    #[arg(long)]
    partial: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "CORGI_VERBOSE")]
    verbose: bool,

    /// Disable colored log output
    #[arg(long, env = "CORGI_NO_COLOR")]
    no_color: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            path: cli.path,
            format: cli.format,
            partial: cli.partial,
            verbose: cli.verbose,
            color: !cli.no_color,
        }
    }
}

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    if let Err(error) = init_logging(config.verbose, config.color) {
        eprintln!("Failed to initialize logging: {}", error);
    }

    match run(&config) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(DriverError::Scan {
            rendered, partial, ..
        }) => {
            if config.partial {
                match render_tokens(&partial, config.format) {
                    Ok(output) => print!("{}", output),
                    Err(error) => eprintln!("Error: {}", error),
                }
            }
            eprint!("{}", rendered);
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with the token output.
fn init_logging(verbose: bool, color: bool) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
}
