//! Error types for the wordbench library.
//!
//! Every failure is terminal for a benchmark run. The binary prints the
//! error's `Display` form as a single diagnostic line and exits with
//! status 1.
//!
//! # Examples
//!
//! ```
//! use wordbench::error::{WordbenchError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordbenchError::config("wordlist file must be given"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wordbench operations.
#[derive(Error, Debug)]
pub enum WordbenchError {
    /// Bad or missing command line arguments.
    #[error("{0}")]
    Config(String),

    /// The word list could not be opened.
    #[error("couldn't open file: {} [{source}]", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read from the word list failed (distinct from end of file).
    #[error("couldn't read from file: {0}")]
    Read(#[source] io::Error),

    /// A replayed token was not found in the corpus built from it.
    #[error("this shouldn't happen, {0} not found in corpus")]
    InvariantViolation(String),

    /// Other I/O errors (writing output, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordbenchError.
pub type Result<T> = std::result::Result<T, WordbenchError>;

impl WordbenchError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordbenchError::Config(msg.into())
    }

    /// Create a new open error for `path`.
    pub fn open<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        WordbenchError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a new invariant violation naming the missing token.
    pub fn invariant<S: Into<String>>(token: S) -> Self {
        WordbenchError::InvariantViolation(token.into())
    }
}
