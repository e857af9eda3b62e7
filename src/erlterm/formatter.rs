//! Formatter module for the term pretty-printer
//!
//! Consumes the lexer's token sequence and re-emits it with two-space
//! indentation and context-sensitive line breaks. The formatter trusts the
//! stream's delimiter pairing; it validates nothing beyond propagating the
//! lexer's own error token.

pub mod indenter;
pub mod pretty;

use std::fmt;
use std::io;

pub use indenter::Indenter;
pub use pretty::pretty_print;

/// Errors that can occur during a formatting pass
#[derive(Debug)]
pub enum FormatError {
    /// The token sequence carried a lex error: its 1-based position in the
    /// sequence and the diagnostic message.
    Lex { index: usize, message: String },
    /// The output sink failed.
    Io(io::Error),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Lex { index, message } => {
                write!(f, "lex error at token {}: {}", index, message)
            }
            FormatError::Io(error) => write!(f, "write error: {}", error),
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormatError::Lex { .. } => None,
            FormatError::Io(error) => Some(error),
        }
    }
}

impl From<io::Error> for FormatError {
    fn from(error: io::Error) -> Self {
        FormatError::Io(error)
    }
}
