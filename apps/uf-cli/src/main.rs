use clap::Parser;
use std::io::Read;
use uf_render::{FormatOptions, Mode, PrecisionPolicy, RoundAlgo};

#[derive(Parser)]
#[command(name = "uncertfmt")]
#[command(about = "Round and format a measurement in publication style", long_about = None)]
struct Cli {
    /// Central value followed by its uncertainties; +x/-y pairs are
    /// asymmetric. A single `-` reads the numbers from standard input.
    #[arg(allow_hyphen_values = true, required = true, value_name = "NUMBER")]
    numbers: Vec<String>,

    /// PDG rounding (default)
    #[arg(short = 'p')]
    pdg: bool,

    /// Round to two significant digits
    #[arg(short = 't')]
    two_digits: bool,

    /// Combined: two significant digits, rounded to the total error
    #[arg(short = 'c')]
    combined: bool,

    /// Round to the total error (quadrature sum, assuming uncorrelated)
    #[arg(short = 'e')]
    total_error: bool,

    /// Round to the larger error (default)
    #[arg(short = 'w')]
    larger_error: bool,

    /// Symmetrize error pairs within ±10%
    #[arg(short = 's')]
    symmetrize: bool,

    /// Factorize powers of ten
    #[arg(short = 'F')]
    factorize: bool,

    /// Multiply with a center dot instead of times
    #[arg(short = 'D')]
    cdot: bool,

    /// ASCII output only
    #[arg(short = 'U')]
    ascii_only: bool,

    /// gnuplot output
    #[arg(short = 'G')]
    gnuplot: bool,

    /// typst output
    #[arg(short = 'T')]
    typst: bool,

    /// (La)TeX output
    #[arg(short = 'X')]
    latex: bool,

    /// Do not print the trailing newline
    #[arg(short = 'N')]
    no_newline: bool,

    /// Comma-separated labels shown after the corresponding errors
    #[arg(short = 'L', value_name = "LABELS")]
    labels: Option<String>,
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Format(#[from] uf_render::FormatError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no numbers given")]
    NoNumbers,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> CliResult<()> {
    let numbers = if cli.numbers.len() == 1 && cli.numbers[0] == "-" {
        read_stdin_numbers()?
    } else {
        cli.numbers.clone()
    };
    let (central, errors) = numbers.split_first().ok_or(CliError::NoNumbers)?;

    let opts = build_options(cli);
    let text = uf_render::format(central, errors, &opts)?;
    print!("{text}");
    Ok(())
}

fn read_stdin_numbers() -> CliResult<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.split_whitespace().map(str::to_string).collect())
}

fn build_options(cli: &Cli) -> FormatOptions {
    let mode = if cli.latex {
        Mode::Latex
    } else if cli.typst {
        Mode::Typst
    } else if cli.gnuplot {
        Mode::Gnuplot
    } else {
        Mode::Terminal
    };

    let algo = if cli.pdg {
        RoundAlgo::Pdg
    } else if cli.two_digits || cli.combined {
        RoundAlgo::TwoDigit
    } else {
        RoundAlgo::Pdg
    };

    // total-error precision wins when both are requested
    let precision = if cli.total_error || cli.combined {
        PrecisionPolicy::TotalError
    } else {
        PrecisionPolicy::LargerError
    };
    let _ = cli.larger_error; // the default; kept as an explicit switch

    FormatOptions {
        mode,
        algo,
        precision,
        symmetrize: cli.symmetrize,
        factorize_powers: cli.factorize,
        ascii_only: cli.ascii_only,
        cdot: cli.cdot,
        trailing_newline: !cli.no_newline,
        labels: cli
            .labels
            .as_deref()
            .map(parse_label_list)
            .unwrap_or_default(),
    }
}

fn parse_label_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_list_is_trimmed_and_non_empty() {
        assert_eq!(
            parse_label_list(" stat , syst ,,lumi"),
            vec!["stat".to_string(), "syst".to_string(), "lumi".to_string()]
        );
        assert!(parse_label_list(" , ").is_empty());
    }

    #[test]
    fn combined_flag_selects_two_digits_and_total_error() {
        let cli = Cli::parse_from(["uncertfmt", "-c", "1.5", "0.23"]);
        let opts = build_options(&cli);
        assert_eq!(opts.algo, RoundAlgo::TwoDigit);
        assert_eq!(opts.precision, PrecisionPolicy::TotalError);
    }

    #[test]
    fn defaults_follow_the_library() {
        let cli = Cli::parse_from(["uncertfmt", "1.5", "0.23"]);
        let opts = build_options(&cli);
        assert_eq!(opts.algo, RoundAlgo::Pdg);
        assert_eq!(opts.precision, PrecisionPolicy::LargerError);
        assert_eq!(opts.mode, Mode::Terminal);
        assert!(opts.trailing_newline);
    }

    #[test]
    fn mode_flags_select_the_dialect() {
        let cli = Cli::parse_from(["uncertfmt", "-X", "1.5", "0.23"]);
        assert_eq!(build_options(&cli).mode, Mode::Latex);

        let cli = Cli::parse_from(["uncertfmt", "-T", "1.5", "0.23"]);
        assert_eq!(build_options(&cli).mode, Mode::Typst);

        let cli = Cli::parse_from(["uncertfmt", "-G", "-N", "1.5", "0.23"]);
        let opts = build_options(&cli);
        assert_eq!(opts.mode, Mode::Gnuplot);
        assert!(!opts.trailing_newline);
    }
}
