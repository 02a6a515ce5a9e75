use thiserror::Error;

pub type CoreResult<T> = Result<T, ParseError>;

/// Failures while parsing a decimal literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty number")]
    Empty,

    #[error("no digits in '{input}'")]
    NoDigits { input: String },

    #[error("multiple decimal points in '{input}'")]
    MultipleDecimalPoints { input: String },

    #[error("invalid character '{found}' in '{input}'")]
    InvalidCharacter { input: String, found: char },

    #[error("mantissa overflow for '{input}'")]
    MantissaOverflow { input: String },
}
