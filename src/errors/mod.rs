//! Error types and error reporting for the scanner.
//!
//! This module defines:
//!
//! - Scan errors with source position information
//! - The specific failure kinds the scanner can raise
//! - Suggestions shown alongside rendered diagnostics
//! - Errors raised by the command-line driver

pub mod errors;
