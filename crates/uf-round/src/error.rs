use thiserror::Error;
use uf_core::ParseError;

pub type RoundResult<T> = Result<T, RoundError>;

/// Errors that can occur while rounding a measurement.
#[derive(Error, Debug)]
pub enum RoundError {
    /// The requested precision is finer than what the value still carries.
    #[error("cannot round {value} to precision {target}")]
    PrecisionExceeded { value: String, target: i32 },

    /// An aggregated value could not be re-read as a decimal number.
    #[error("aggregation error: {0}")]
    Parse(#[from] ParseError),
}
