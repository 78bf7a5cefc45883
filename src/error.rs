//! Error types for mdfence I/O and CLI operations.
//!
//! The escaping itself cannot fail; only reading, writing, and
//! interpreting user-supplied settings can.

use thiserror::Error;

/// Errors that can occur around an escaping run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
