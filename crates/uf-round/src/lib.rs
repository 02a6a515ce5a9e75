//! uf-round: significant-digit reduction and uncertainty aggregation.
//!
//! Contains:
//! - aggregate (quadrature sum, symmetrization of error pairs)
//! - policy (PDG / two-digit reduction, precision matching, orchestration)
//! - error (rounding failures)

pub mod aggregate;
pub mod error;
pub mod policy;

pub use aggregate::{SYMMETRIZE_THRESHOLD, quadrature_sum, symmetrize};
pub use error::{RoundError, RoundResult};
pub use policy::{
    PrecisionPolicy, RoundAlgo, RoundOptions, keep_three_digits, pdg, round, round_to_precision,
    two_digit,
};
