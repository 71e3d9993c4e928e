//! # Error Types
//!
//! This module defines error types used throughout the hoin library.
//!
//! Errors fall into three groups:
//!
//! - [`ValidationError`]: a parameter was rejected before any byte was sent.
//!   These are always recoverable by retrying with corrected input.
//! - Transport failures ([`HoinError::Transport`], [`HoinError::Redial`]):
//!   the byte stream to the printer failed. Transient failures are redialed
//!   once by the transport before they ever surface here.
//! - [`HoinError::UnexpectedEof`]: a status reply byte never arrived.

use std::io;

use thiserror::Error;

/// A parameter was outside the range, set, or alphabet the printer accepts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Integer parameter outside its inclusive range
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Value not in the operation's legal set
    #[error("{value} was not a valid choice from [{choices}]")]
    InvalidChoice { value: String, choices: String },

    /// More horizontal tab positions than the printer can store
    #[error("at most {max} tab positions can be set, got {count}")]
    TooManyTabStops { count: usize, max: usize },

    /// Barcode payload contains a character outside the symbology's alphabet
    #[error("{character:?} was in the bar code data and only {accepted:?} is accepted")]
    InvalidCharacter {
        character: char,
        accepted: &'static str,
    },

    /// CODABAR payload is missing its start/stop letters
    #[error("the first and last character of CODABAR must be one of {wrappers}")]
    CodabarWrapper { wrappers: &'static str },

    /// Barcode payload length outside the symbology's bounds
    #[error("{symbology} data length must be between {min} and {max}, got {length}")]
    LengthOutOfRange {
        symbology: &'static str,
        length: usize,
        min: usize,
        max: usize,
    },

    /// Image wider than a 2-byte column count can describe
    #[error("image width {width} exceeds the maximum of {max} dots")]
    ImageTooWide { width: u32, max: u32 },
}

/// Main error type for hoin operations
#[derive(Debug, Error)]
pub enum HoinError {
    /// Invalid command parameter, raised before anything is written
    #[error("invalid parameter: {0}")]
    Validation(#[from] ValidationError),

    /// The underlying stream failed and was not (or could not be) healed
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: io::Error,
    },

    /// A transient failure triggered a redial, and the redial failed too
    #[error("could not redial after \"{original}\": {redial}")]
    Redial {
        original: io::Error,
        #[source]
        redial: io::Error,
    },

    /// The printer closed the stream before sending its status reply
    #[error("printer closed the connection before replying")]
    UnexpectedEof,

    /// Image decoding or conversion error
    #[error("image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HoinError {
    /// A transport failure with a description of what was being attempted.
    pub fn transport(context: impl Into<String>, source: io::Error) -> Self {
        HoinError::Transport {
            context: context.into(),
            source,
        }
    }

    /// True for errors detected before any byte reached the printer.
    pub fn is_validation(&self) -> bool {
        matches!(self, HoinError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_bound() {
        let err = ValidationError::OutOfRange {
            name: "feed",
            value: 300,
            min: 0,
            max: 255,
        };
        assert_eq!(err.to_string(), "feed must be between 0 and 255, got 300");
    }

    #[test]
    fn test_redial_reports_both_errors() {
        let err = HoinError::Redial {
            original: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
            redial: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        let msg = err.to_string();
        assert!(msg.contains("pipe closed"));
        assert!(msg.contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_is_flagged() {
        let err: HoinError = ValidationError::TooManyTabStops { count: 33, max: 32 }.into();
        assert!(err.is_validation());
        assert!(!HoinError::UnexpectedEof.is_validation());
    }
}
