//! Error types for schema decoding and request handling.

use std::fmt::Display;

use serde::de;
use thiserror::Error;

/// Error returned while decoding responses or checking requests.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchemaError {
    /// A response payload did not match the expected schema.
    #[error("{}", format_decoding_error(.message, .line, .column))]
    Decoding {
        /// Description of the decoding error.
        message: String,
        /// 1-based line in the payload where the error was detected.
        line: Option<usize>,
        /// 1-based column in the payload where the error was detected.
        column: Option<usize>,
    },

    /// A string did not belong to a closed vocabulary.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Name of the vocabulary (e.g., "state code").
        kind: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The provided input is invalid for this operation.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what is invalid about the input.
        message: String,
    },

    /// A result echoed an `input_id` that differs from the request item at
    /// its `input_index`.
    #[error(
        "input_id mismatch at input_index {input_index}: expected {expected:?}, found {found:?}"
    )]
    EchoMismatch {
        /// Index of the request item the result points at.
        input_index: usize,
        /// The `input_id` sent with that request item.
        expected: Option<String>,
        /// The `input_id` echoed by the result.
        found: Option<String>,
    },
}

fn format_decoding_error(message: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!("decoding error at line {l} column {c}: {message}"),
        (Some(l), None) => format!("decoding error at line {l}: {message}"),
        (None, _) => format!("decoding error: {message}"),
    }
}

impl SchemaError {
    /// Creates a Decoding error with just a message.
    pub fn decoding(message: impl Into<String>) -> Self {
        SchemaError::Decoding {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Creates a Decoding error with message and payload position.
    pub fn decoding_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        SchemaError::Decoding {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    /// Creates an UnknownVariant error.
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        SchemaError::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Creates an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SchemaError::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json reports line 0 for errors not tied to a position
        if err.line() == 0 {
            return SchemaError::decoding(err.to_string());
        }
        let message = strip_position_suffix(&err.to_string());
        SchemaError::decoding_at(message, err.line(), err.column())
    }
}

/// serde_json appends " at line L column C" to its messages; the position
/// is carried separately here.
fn strip_position_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_owned(),
        None => message.to_owned(),
    }
}

impl de::Error for SchemaError {
    fn custom<T: Display>(msg: T) -> Self {
        SchemaError::decoding(msg.to_string())
    }
}
