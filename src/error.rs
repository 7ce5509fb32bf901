//! Centralised error hierarchy for the **sentence parser**.
//!
//! The parser reports every grammar violation as a single [`SentenceError::Syntax`]
//! value whose message is drawn from the fixed set in [`crate::parser::messages`].
//! The remaining variants only exist so the binary can use `?` on input handling.
//!
//! The module **does not** print diagnostics itself

use std::io;
use thiserror::Error;

use log::info;

/// Canonical error type used throughout the crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SentenceError {
    /// Syntactic (parser) error.  Displays exactly the diagnostic message.
    #[error("{message}")]
    Syntax {
        /// Human‑readable description naming the nonterminal at fault.
        message: String,
    },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl SentenceError {
    /// Helper constructor for the **parser**.
    pub fn syntax<S: Into<String>>(msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Syntax error: msg={}", message);

        SentenceError::Syntax { message }
    }

    /// The diagnostic text of a syntax error, `None` for I/O failures.
    pub fn message(&self) -> Option<&str> {
        match self {
            SentenceError::Syntax { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, SentenceError>;
