//! Error types for selectkit.
//!
//! Selection itself never fails; only the edges that parse external input do.

use serde_json::Value;

/// Result type alias for selectkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a select from external input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed JSON, or JSON that does not match the props shape.
    #[error("Invalid select props: {0}")]
    Json(#[from] serde_json::Error),

    /// The options payload is not an array.
    #[error("Options must be an array, got {found}")]
    OptionsNotArray { found: &'static str },

    /// An entry of the options array is not an object.
    #[error("Invalid option at index {index}: expected an object, got {found}")]
    InvalidOption { index: usize, found: &'static str },

    /// Unknown size token.
    #[error("Unknown size '{0}', expected 'big' or 'small'")]
    InvalidSize(String),
}

impl Error {
    /// Create an error for a non-array options payload.
    pub fn options_not_array(value: &Value) -> Self {
        Self::OptionsNotArray {
            found: json_kind(value),
        }
    }

    /// Create an error for a non-object option entry.
    pub fn invalid_option(index: usize, value: &Value) -> Self {
        Self::InvalidOption {
            index,
            found: json_kind(value),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
