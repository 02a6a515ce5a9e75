//! Significant-digit reduction policies and precision matching.

use crate::aggregate::{SYMMETRIZE_THRESHOLD, quadrature_sum, symmetrize};
use crate::error::{RoundError, RoundResult};
use tracing::warn;
use uf_core::DecimalNumber;

/// Which reduction rule shapes the significant digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundAlgo {
    /// PDG convention: 1 or 2 significant digits depending on the mantissa band.
    #[default]
    Pdg,
    /// Always two significant digits.
    TwoDigit,
}

/// How the central value's precision is matched to the errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrecisionPolicy {
    /// Reduce the central value and every error independently.
    Independent,
    /// Match everything to the least precise reduced error.
    #[default]
    LargerError,
    /// Match everything to the reduced quadrature sum of the errors.
    TotalError,
}

/// Configuration for one rounding pass.
#[derive(Clone, Debug, Default)]
pub struct RoundOptions {
    pub algo: RoundAlgo,
    pub precision: PrecisionPolicy,
    pub symmetrize: bool,
    /// Suppress the zero-padding warning.
    pub quiet: bool,
}

/// Normalize to exactly three significant mantissa digits.
///
/// Fewer digits are padded with zeros (warned unless `quiet`); excess digits
/// are dropped with round-half-up on the final drop. A zero mantissa carries
/// no significant digits and is left untouched.
pub fn keep_three_digits(n: &mut DecimalNumber, quiet: bool) {
    if n.mantissa == 0 {
        return;
    }
    let nd = n.digit_count();
    if nd < 3 {
        if !quiet {
            warn!("not enough significant digits, padding with zeros");
        }
        let pad = 3 - nd;
        n.mantissa *= 10u64.pow(pad);
        n.exponent -= pad as i32;
    } else if nd > 3 {
        let mut drop = nd - 3;
        let mut last = 0;
        while drop > 0 {
            last = n.mantissa % 10;
            n.mantissa /= 10;
            n.exponent += 1;
            drop -= 1;
        }
        if last >= 5 {
            n.mantissa += 1;
            if n.mantissa == 1000 {
                n.mantissa = 100;
                n.exponent += 1;
            }
        }
    }
}

/// PDG reduction: normalize to three digits, then apply the band rule.
///
/// Mantissa 100-354 keeps two significant digits, 355-949 keeps one,
/// 950-999 becomes 10 with the exponent raised by two, preserving the
/// two-significant-digit convention at the top of the range.
pub fn pdg(n: &mut DecimalNumber, quiet: bool) {
    if n.mantissa == 0 {
        return;
    }
    keep_three_digits(n, quiet);
    match n.mantissa {
        100..=354 => {
            let unit = n.mantissa % 10;
            n.mantissa /= 10;
            if unit >= 5 {
                n.mantissa += 1;
            }
            n.exponent += 1;
        }
        355..=949 => {
            let middle = (n.mantissa / 10) % 10;
            n.mantissa /= 100;
            n.exponent += 2;
            if middle >= 5 {
                n.mantissa += 1;
            }
        }
        _ => {
            n.mantissa = 10;
            n.exponent += 2;
        }
    }
}

/// Two-digit reduction: normalize to three digits, drop the last half-up.
pub fn two_digit(n: &mut DecimalNumber, quiet: bool) {
    if n.mantissa == 0 {
        return;
    }
    keep_three_digits(n, quiet);
    let unit = n.mantissa % 10;
    n.mantissa /= 10;
    if unit >= 5 {
        n.mantissa += 1;
    }
    n.exponent += 1;
}

/// Strip digits until the exponent reaches `target`, rounding half-up on the
/// final drop.
///
/// Fails when `target` is finer than the value's exponent: that precision has
/// already been discarded and cannot be recovered.
pub fn round_to_precision(n: &mut DecimalNumber, target: i32) -> RoundResult<()> {
    if target < n.exponent {
        return Err(RoundError::PrecisionExceeded {
            value: n.to_text(false),
            target,
        });
    }
    let mut last = 0;
    while n.exponent < target {
        last = n.mantissa % 10;
        n.mantissa /= 10;
        n.exponent += 1;
    }
    if last >= 5 {
        n.mantissa += 1;
    }
    Ok(())
}

/// Round a central value and its errors in place.
///
/// Symmetrizes first when requested, establishes the target precision per the
/// configured policy, then matches every value to it. Values already coarser
/// than the target keep their own digits: zero-padding would claim precision
/// the input never had, and aborting would reject well-formed measurements.
pub fn round(
    central: &mut DecimalNumber,
    errors: &mut Vec<DecimalNumber>,
    opts: &RoundOptions,
) -> RoundResult<()> {
    if opts.symmetrize {
        symmetrize(errors, SYMMETRIZE_THRESHOLD)?;
    }

    let reduce: fn(&mut DecimalNumber, bool) = match opts.algo {
        RoundAlgo::Pdg => pdg,
        RoundAlgo::TwoDigit => two_digit,
    };

    let target = if errors.is_empty() {
        None
    } else {
        match opts.precision {
            PrecisionPolicy::TotalError => {
                let mut total = quadrature_sum(errors)?;
                reduce(&mut total, opts.quiet);
                Some(total.exponent)
            }
            PrecisionPolicy::LargerError => {
                let mut prec = i32::MIN;
                for e in errors.iter_mut() {
                    reduce(e, opts.quiet);
                    prec = prec.max(e.exponent);
                }
                Some(prec)
            }
            PrecisionPolicy::Independent => None,
        }
    };

    match target {
        Some(prec) => {
            if central.exponent <= prec {
                round_to_precision(central, prec)?;
            }
            for e in errors.iter_mut() {
                if e.exponent <= prec {
                    round_to_precision(e, prec)?;
                }
            }
        }
        None => {
            reduce(central, opts.quiet);
            for e in errors.iter_mut() {
                reduce(e, opts.quiet);
            }
        }
    }
    Ok(())
}
