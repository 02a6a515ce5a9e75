//! Combination and symmetrization of uncertainty sequences.

use tracing::warn;
use uf_core::{CoreResult, DecimalNumber, Sign};

/// Asymmetric pairs closer than this relative fraction are merged.
pub const SYMMETRIZE_THRESHOLD: f64 = 0.10;

/// Quadrature sum `sqrt(sum of squares)` of a sequence of uncertainties,
/// assuming they are uncorrelated.
///
/// Uses compensated (Kahan) summation. A single-element sequence is returned
/// unchanged. Signed entries are halved before squaring, and when a signed
/// entry completes an upper/lower pair the missing cross term is injected so
/// the pair contributes exactly the square of its simple average.
///
/// An odd number of signed entries means the sequence is malformed; the sum
/// is still produced but flagged unreliable.
pub fn quadrature_sum(errors: &[DecimalNumber]) -> CoreResult<DecimalNumber> {
    if errors.len() == 1 {
        return Ok(errors[0]);
    }

    let mut sum = 0.0_f64;
    let mut comp = 0.0_f64;
    let mut pending_half: Option<f64> = None;
    for e in errors {
        let mut v = e.to_number();
        let mut cross = 0.0;
        if e.sign.is_signed() {
            v = v.abs() * 0.5;
            match pending_half.take() {
                Some(half) => cross = 2.0 * half * v,
                None => pending_half = Some(v),
            }
        }
        let y = (v * v + cross) - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }

    if pending_half.is_some() {
        warn!("asymmetric errors do not seem to come in pairs");
        warn!("the total error computation is unreliable");
    }

    DecimalNumber::from_numeric(sum.sqrt(), Sign::Unsigned)
}

/// Merge asymmetric error pairs whose magnitudes are close.
///
/// Scans from the end; a signed entry pairs with its immediate predecessor.
/// When the relative difference of their absolute magnitudes is strictly
/// below `threshold`, the predecessor slot is replaced with an unsigned entry
/// equal to their average and the later slot is removed. Pairing is
/// positional: a signed entry whose predecessor is unsigned is reported as
/// unpaired but still compared.
pub fn symmetrize(errors: &mut Vec<DecimalNumber>, threshold: f64) -> CoreResult<()> {
    let mut idx = errors.len() as i64 - 1;
    while idx > 0 {
        let cur = idx as usize;
        if !errors[cur].sign.is_signed() {
            idx -= 1;
            continue;
        }
        let prev = cur - 1;
        if !errors[prev].sign.is_signed() {
            warn!("asymmetric errors do not seem to come in pairs");
        }

        if relative_difference(&errors[prev], &errors[cur]) < threshold {
            let earlier = errors[prev].to_number().abs();
            let later = errors[cur].to_number().abs();
            errors[prev] = DecimalNumber::from_numeric(0.5 * (earlier + later), Sign::Unsigned)?;
            errors.remove(cur);
        }
        idx -= 2;
    }
    Ok(())
}

/// `|earlier/later - 1|` on absolute magnitudes.
///
/// Computed on decimally aligned integer mantissas so that a pair sitting
/// exactly on the threshold is not pulled under it by float round-off.
fn relative_difference(earlier: &DecimalNumber, later: &DecimalNumber) -> f64 {
    match aligned_magnitudes(earlier, later) {
        Some((e, l)) if l != 0 => e.abs_diff(l) as f64 / l as f64,
        _ => (earlier.to_number().abs() / later.to_number().abs() - 1.0).abs(),
    }
}

/// Both mantissas brought to the smaller of the two exponents.
///
/// `None` when the exponent gap is too wide for exact integer arithmetic.
fn aligned_magnitudes(a: &DecimalNumber, b: &DecimalNumber) -> Option<(u128, u128)> {
    let base = a.exponent.min(b.exponent);
    let scale = |n: &DecimalNumber| {
        let shift = (n.exponent - base) as u32;
        10u128
            .checked_pow(shift)
            .and_then(|p| u128::from(n.mantissa).checked_mul(p))
    };
    Some((scale(a)?, scale(b)?))
}
