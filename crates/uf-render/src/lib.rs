//! uf-render: publication-style rendering of a measurement.
//!
//! Ties the pieces together: parse the central value and its uncertainties,
//! round them per the configured policy, and compose the mode-specific text.

pub mod measurement;
pub mod options;
pub mod render;
pub mod symbols;

pub use measurement::Measurement;
pub use options::{FormatOptions, Mode};
pub use render::render;
pub use symbols::{SymbolTable, symbols};
pub use uf_core::{DecimalNumber, ParseError, Sign};
pub use uf_round::{PrecisionPolicy, RoundAlgo, RoundError};

pub type RenderResult<T> = Result<T, FormatError>;

/// A formatting request either fails whole or yields the complete text.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("rounding error: {0}")]
    Round(#[from] RoundError),
}

/// Round and render already-parsed values.
///
/// The rounded values replace the inputs internally; the caller's copies are
/// untouched.
pub fn format_numbers(
    mut central: DecimalNumber,
    mut errors: Vec<DecimalNumber>,
    opts: &FormatOptions,
) -> RenderResult<String> {
    let round_opts = uf_round::RoundOptions {
        algo: opts.algo,
        precision: opts.precision,
        symmetrize: opts.symmetrize,
        // padding chatter is suppressed except for plain factorized output
        quiet: !(opts.mode == Mode::Terminal && opts.factorize_powers),
    };
    uf_round::round(&mut central, &mut errors, &round_opts)?;
    Ok(render::render(&central, &errors, opts))
}

/// Parse, round and render a measurement given as text.
///
/// Uncertainties with an explicit `+`/`-` are asymmetric and must come in
/// consecutive upper-then-lower pairs; unsigned ones are symmetric.
pub fn format<S: AsRef<str>>(
    central: &str,
    errors: &[S],
    opts: &FormatOptions,
) -> RenderResult<String> {
    let central = DecimalNumber::from_text(central)?;
    let errors = errors
        .iter()
        .map(|e| DecimalNumber::from_text(e.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    format_numbers(central, errors, opts)
}

/// Round and render numeric values.
///
/// Each value goes through its shortest exact decimal text. Negative errors
/// become lower asymmetric entries; use
/// [`DecimalNumber::from_numeric`] with a sign hint to force an upper one.
pub fn format_values(central: f64, errors: &[f64], opts: &FormatOptions) -> RenderResult<String> {
    let central = DecimalNumber::from_numeric(central, Sign::Unsigned)?;
    let errors = errors
        .iter()
        .map(|&e| DecimalNumber::from_numeric(e, Sign::Unsigned))
        .collect::<Result<Vec<_>, _>>()?;
    format_numbers(central, errors, opts)
}
