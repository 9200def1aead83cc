//! Errors raised by the text utilities.

use std::num::ParseFloatError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of a failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An argument had the wrong type.
    Type,

    /// An argument had the right type but an unusable value.
    Value,
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid type: Expected '{expected}', but received '{received}'.")]
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },

    #[error("Input '{0}' must be a non-empty string.")]
    EmptyInput(&'static str),

    #[error("Input '{0}' must be a string.")]
    NotAString(&'static str),

    #[error("Input '{0}' must be a number.")]
    NotANumber(&'static str),

    #[error("Text should have at least three characters")]
    HashTagTooShort,

    #[error("Phone number is required.")]
    PhoneNumberRequired,

    #[error("Phone number must contain only digits.")]
    PhoneNumberNotDigits,

    /// Carries the number of characters that were supplied.
    #[error("Phone number must be either 9 or 12 characters long.")]
    PhoneNumberLength(usize),

    #[error("Invalid 'caseName'. Expected one of: {expected}")]
    UnknownTextCase { name: String, expected: String },

    #[error("Unknown function '{0}'.")]
    UnknownFunction(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid price: {0}")]
    Price(#[from] ParseFloatError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidType { .. } => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kind() {
        let error = Error::InvalidType {
            expected: "string",
            received: "number",
        };
        assert_eq!(error.kind(), ErrorKind::Type);
        assert_eq!(Error::EmptyInput("text").kind(), ErrorKind::Value);
        assert_eq!(Error::PhoneNumberLength(7).kind(), ErrorKind::Value);
    }

    #[test]
    fn messages() {
        let error = Error::InvalidType {
            expected: "string",
            received: "undefined",
        };
        assert_eq!(
            error.to_string(),
            "Invalid type: Expected 'string', but received 'undefined'."
        );
        assert_eq!(
            Error::EmptyInput("word").to_string(),
            "Input 'word' must be a non-empty string."
        );
        assert_eq!(
            Error::PhoneNumberLength(15).to_string(),
            "Phone number must be either 9 or 12 characters long."
        );
    }
}
