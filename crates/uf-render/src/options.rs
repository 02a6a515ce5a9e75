//! Formatting configuration.

use uf_round::{PrecisionPolicy, RoundAlgo};

/// Output dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Terminal,
    Latex,
    Typst,
    Gnuplot,
}

/// Options for one format call.
///
/// Read-only for the duration of the call; nothing persists across calls.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    pub mode: Mode,
    pub algo: RoundAlgo,
    pub precision: PrecisionPolicy,
    /// Merge asymmetric pairs within the relative threshold before rounding.
    pub symmetrize: bool,
    /// Show one power of ten for the whole measurement.
    pub factorize_powers: bool,
    /// Replace the multiplication and plus-minus glyphs with ASCII.
    pub ascii_only: bool,
    /// Multiply with a center dot instead of the times glyph.
    pub cdot: bool,
    /// Append a newline to the rendered text.
    pub trailing_newline: bool,
    /// One label per uncertainty pair or singleton, in order.
    pub labels: Vec<String>,
}

impl FormatOptions {
    /// Build options from a compact flag-letter spec.
    ///
    /// The letters are the ones the command line uses, minus the list-valued
    /// label flag which cannot be expressed inline. The spec starts from the
    /// combined style (two digits, total-error precision) and unknown letters
    /// are ignored.
    pub fn from_flag_spec(spec: &str) -> Self {
        let mut opts = Self {
            algo: RoundAlgo::TwoDigit,
            ..Self::default()
        };
        let mut total_error = true;
        let mut larger_error = false;
        for c in spec.chars() {
            match c {
                'c' => {
                    opts.algo = RoundAlgo::TwoDigit;
                    total_error = true;
                }
                'e' => total_error = true,
                'l' => larger_error = true,
                'p' => opts.algo = RoundAlgo::Pdg,
                's' => opts.symmetrize = true,
                't' => opts.algo = RoundAlgo::TwoDigit,
                'D' => opts.cdot = true,
                'F' => opts.factorize_powers = true,
                'G' => opts.mode = Mode::Gnuplot,
                'N' => {} // the embedding caller owns the newline
                'T' => opts.mode = Mode::Typst,
                'U' => opts.ascii_only = true,
                'X' => opts.mode = Mode::Latex,
                _ => {} // unknown letters are ignored
            }
        }
        opts.precision = if total_error {
            PrecisionPolicy::TotalError
        } else if larger_error {
            PrecisionPolicy::LargerError
        } else {
            PrecisionPolicy::Independent
        };
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pdg_matched_to_larger_error() {
        let opts = FormatOptions::default();
        assert_eq!(opts.algo, RoundAlgo::Pdg);
        assert_eq!(opts.precision, PrecisionPolicy::LargerError);
        assert_eq!(opts.mode, Mode::Terminal);
        assert!(!opts.symmetrize);
        assert!(!opts.factorize_powers);
        assert!(!opts.ascii_only);
        assert!(!opts.cdot);
        assert!(!opts.trailing_newline);
        assert!(opts.labels.is_empty());
    }

    #[test]
    fn flag_spec_defaults_to_combined_style() {
        let opts = FormatOptions::from_flag_spec("");
        assert_eq!(opts.algo, RoundAlgo::TwoDigit);
        assert_eq!(opts.precision, PrecisionPolicy::TotalError);
    }

    #[test]
    fn flag_spec_letters_map_to_fields() {
        let opts = FormatOptions::from_flag_spec("psFX");
        assert_eq!(opts.algo, RoundAlgo::Pdg);
        assert!(opts.symmetrize);
        assert!(opts.factorize_powers);
        assert_eq!(opts.mode, Mode::Latex);
    }

    #[test]
    fn flag_spec_ignores_unknown_letters() {
        let opts = FormatOptions::from_flag_spec("zzqT");
        assert_eq!(opts.mode, Mode::Typst);
    }
}
