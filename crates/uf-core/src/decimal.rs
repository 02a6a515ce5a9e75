//! Exact decimal representation of a measured value or uncertainty.

use crate::error::{CoreResult, ParseError};
use std::fmt;
use std::str::FromStr;

/// Sign state of a [`DecimalNumber`].
///
/// `Unsigned` marks a symmetric, magnitude-only uncertainty: it is printed
/// without a leading sign token and paired with a `±` glyph at render time.
/// `Positive` / `Negative` mark the upper / lower half of an asymmetric
/// uncertainty and carry an explicit `+` / `-` in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Negative,
    #[default]
    Unsigned,
    Positive,
}

impl Sign {
    /// True for the explicitly signed (asymmetric) states.
    pub fn is_signed(self) -> bool {
        self != Sign::Unsigned
    }

    /// Numeric factor for arithmetic; `Unsigned` counts as positive.
    pub fn factor(self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Unsigned | Sign::Positive => 1.0,
        }
    }
}

/// A number as `sign * mantissa * 10^exponent`, kept exact.
///
/// The mantissa is always non-negative; the exponent is unrestricted.
/// Rounding mutates a value in place (digits dropped, exponent raised), so a
/// rounded value replaces the original rather than supplementing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalNumber {
    pub mantissa: u64,
    pub exponent: i32,
    pub sign: Sign,
}

impl DecimalNumber {
    pub fn new(sign: Sign, mantissa: u64, exponent: i32) -> Self {
        Self {
            mantissa,
            exponent,
            sign,
        }
    }

    /// Parse a decimal literal.
    ///
    /// Leading/trailing whitespace is ignored. An explicit `+` or `-` maps to
    /// [`Sign::Positive`] / [`Sign::Negative`]; no sign means
    /// [`Sign::Unsigned`]. The rest must be digits with at most one decimal
    /// point. The exponent is the negated count of digits after the point.
    pub fn from_text(text: &str) -> CoreResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let (sign, body) = match trimmed.as_bytes()[0] {
            b'+' => (Sign::Positive, &trimmed[1..]),
            b'-' => (Sign::Negative, &trimmed[1..]),
            _ => (Sign::Unsigned, trimmed),
        };

        let mut mantissa: u64 = 0;
        let mut digits = 0usize;
        let mut after_dot: Option<usize> = None;
        for c in body.chars() {
            if c == '.' {
                if after_dot.is_some() {
                    return Err(ParseError::MultipleDecimalPoints {
                        input: trimmed.to_string(),
                    });
                }
                after_dot = Some(0);
            } else if let Some(d) = c.to_digit(10) {
                mantissa = mantissa
                    .checked_mul(10)
                    .and_then(|m| m.checked_add(u64::from(d)))
                    .ok_or_else(|| ParseError::MantissaOverflow {
                        input: trimmed.to_string(),
                    })?;
                digits += 1;
                if let Some(n) = after_dot.as_mut() {
                    *n += 1;
                }
            } else {
                return Err(ParseError::InvalidCharacter {
                    input: trimmed.to_string(),
                    found: c,
                });
            }
        }
        if digits == 0 {
            return Err(ParseError::NoDigits {
                input: trimmed.to_string(),
            });
        }

        Ok(Self {
            mantissa,
            exponent: -(after_dot.unwrap_or(0) as i32),
            sign,
        })
    }

    /// Convert a built-in numeric value through its shortest round-trip
    /// decimal text.
    ///
    /// `sign_hint` forces a leading `+`/`-` so the result is interpreted as
    /// an asymmetric uncertainty; `Sign::Unsigned` leaves the text as-is.
    /// Non-finite values fail as a parse error.
    pub fn from_numeric(value: f64, sign_hint: Sign) -> CoreResult<Self> {
        // Rust's Display for f64 is the shortest exact round-trip form.
        let mut text = String::with_capacity(24);
        match sign_hint {
            Sign::Positive => {
                text.push('+');
                text.push_str(&value.abs().to_string());
            }
            Sign::Negative => {
                text.push('-');
                text.push_str(&value.abs().to_string());
            }
            Sign::Unsigned => text.push_str(&value.to_string()),
        }
        Self::from_text(&text)
    }

    /// Decimal string of this value.
    ///
    /// With `factorize` set the power of ten is deferred to the renderer:
    /// only the mantissa digits (and the sign) are emitted, never trailing
    /// zeros or a decimal point.
    pub fn to_text(&self, factorize: bool) -> String {
        let mant = self.mantissa.to_string();
        let mut out = String::with_capacity(mant.len() + self.exponent.unsigned_abs() as usize + 2);

        if self.sign == Sign::Negative {
            out.push('-');
        }

        if self.exponent >= 0 || factorize {
            out.push_str(&mant);
            if !factorize {
                for _ in 0..self.exponent {
                    out.push('0');
                }
            }
        } else {
            let shift = self.exponent.unsigned_abs() as usize;
            if shift >= mant.len() {
                // 0.xxx… case
                out.push_str("0.");
                for _ in 0..shift - mant.len() {
                    out.push('0');
                }
                out.push_str(&mant);
            } else {
                let int_len = mant.len() - shift;
                out.push_str(&mant[..int_len]);
                out.push('.');
                out.push_str(&mant[int_len..]);
            }
        }
        out
    }

    /// Approximate numeric value, for aggregation arithmetic only.
    pub fn to_number(&self) -> f64 {
        self.sign.factor() * self.mantissa as f64 * 10f64.powi(self.exponent)
    }

    /// Number of decimal digits in the mantissa (1 for zero).
    pub fn digit_count(&self) -> u32 {
        if self.mantissa == 0 {
            1
        } else {
            self.mantissa.ilog10() + 1
        }
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(false))
    }
}

impl FromStr for DecimalNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}
