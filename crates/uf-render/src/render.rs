//! Mode-aware textual composition of a rounded measurement.

use crate::options::{FormatOptions, Mode};
use crate::symbols::symbols;
use uf_core::{DecimalNumber, Sign};

/// Render a central value and its uncertainties.
///
/// The values are taken as already rounded. Labels attach one per
/// uncertainty pair or singleton; the emission counter advances twice for a
/// symmetric entry so label indexing stays aligned.
pub fn render(central: &DecimalNumber, errors: &[DecimalNumber], opts: &FormatOptions) -> String {
    let sym = symbols(opts.mode, opts.ascii_only);
    let mut out = String::with_capacity(128);

    let factorized = opts.factorize_powers && central.exponent != 0;
    if factorized {
        out.push_str(sym.power_open);
    }

    out.push_str(&central.to_text(opts.factorize_powers));

    let mut counter = 0usize;
    for e in errors {
        out.push(' ');
        let scripted = e.sign.is_signed() && opts.mode != Mode::Terminal;
        if scripted {
            if counter % 2 == 0 {
                out.push_str(sym.script_space);
            }
            out.push(if e.sign == Sign::Positive { '^' } else { '_' });
            out.push_str(sym.script_open);
        }
        match e.sign {
            Sign::Unsigned => {
                out.push_str(sym.plus_minus);
                out.push(' ');
                counter += 1; // advance by two in total for symmetric entries
            }
            Sign::Positive => out.push('+'),
            Sign::Negative => {} // the '-' is embedded in the digit text
        }
        out.push_str(&e.to_text(opts.factorize_powers));
        if scripted {
            out.push_str(sym.script_close);
        }
        counter += 1;
        if counter % 2 == 0 {
            if let Some(label) = opts.labels.get(counter / 2 - 1) {
                out.push(' ');
                out.push_str(sym.label_open);
                out.push_str(label);
                out.push_str(sym.label_close);
            }
        }
    }

    if factorized {
        out.push_str(sym.power_close);
        out.push_str(if opts.cdot { sym.cdot } else { sym.times });
        out.push_str("10");
        if central.exponent != 1 {
            out.push('^');
            out.push_str(sym.script_open);
            out.push_str(&central.exponent.to_string());
            out.push_str(sym.script_close);
        }
    }

    if opts.trailing_newline {
        out.push('\n');
    }
    out
}
