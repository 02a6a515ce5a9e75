//! Per-mode glyph and delimiter tables.

use crate::options::Mode;

/// Glyphs and delimiters for one output dialect.
#[derive(Clone, Copy, Debug)]
pub struct SymbolTable {
    /// Multiplication glyph for the factorized power.
    pub times: &'static str,
    /// Alternate multiplication glyph (center dot).
    pub cdot: &'static str,
    /// Plus-minus glyph for symmetric uncertainties.
    pub plus_minus: &'static str,
    /// Grouping around the factorized measurement.
    pub power_open: &'static str,
    pub power_close: &'static str,
    /// Grouping around super/subscript bodies and the exponent.
    pub script_open: &'static str,
    pub script_close: &'static str,
    /// Spacing inserted before the first script of a pair.
    pub script_space: &'static str,
    /// Wrapping around uncertainty labels.
    pub label_open: &'static str,
    pub label_close: &'static str,
}

const TERMINAL: SymbolTable = SymbolTable {
    times: "×",
    cdot: "·",
    plus_minus: "±",
    power_open: "(",
    power_close: ")",
    script_open: "",
    script_close: "",
    script_space: "",
    label_open: "",
    label_close: "",
};

const LATEX: SymbolTable = SymbolTable {
    times: " \\times ",
    cdot: "\\cdot",
    plus_minus: "\\pm",
    power_open: "\\left( ",
    power_close: " \\right)",
    script_open: "{",
    script_close: "}",
    script_space: "\\,",
    label_open: "\\text{",
    label_close: "}",
};

const TYPST: SymbolTable = SymbolTable {
    times: " times ",
    cdot: " dot.op ",
    plus_minus: " plus.minus ",
    power_open: "(",
    power_close: ")",
    script_open: "(",
    script_close: ")",
    script_space: "#h(0.0em)",
    label_open: "\"",
    label_close: "\"",
};

const GNUPLOT: SymbolTable = SymbolTable {
    times: "×",
    cdot: "· ",
    plus_minus: "±",
    power_open: "(",
    power_close: ")",
    script_open: "{",
    script_close: "}",
    script_space: "",
    label_open: "",
    label_close: "",
};

/// Symbol table for a mode.
///
/// The ASCII override replaces only the multiplication, cdot and plus-minus
/// glyphs; the mode's delimiters stay.
pub fn symbols(mode: Mode, ascii_only: bool) -> SymbolTable {
    let base = match mode {
        Mode::Terminal => TERMINAL,
        Mode::Latex => LATEX,
        Mode::Typst => TYPST,
        Mode::Gnuplot => GNUPLOT,
    };
    if ascii_only {
        SymbolTable {
            times: "x",
            cdot: ".",
            plus_minus: "+/-",
            ..base
        }
    } else {
        base
    }
}
