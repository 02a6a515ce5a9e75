//! End-to-end formatting scenarios through the public entry points.

use uf_render::{FormatError, FormatOptions, Mode, PrecisionPolicy, RoundAlgo, format};

#[test]
fn symmetric_error_with_defaults() {
    let out = format("1.5", &["0.23"], &FormatOptions::default()).unwrap();
    assert_eq!(out, "1.5 ± 0.23");
}

#[test]
fn asymmetric_pair_with_defaults() {
    let out = format("2.5", &["+0.3", "-0.2"], &FormatOptions::default()).unwrap();
    assert_eq!(out, "2.5 +0.30 -0.20");
}

#[test]
fn asymmetric_pair_in_latex() {
    let opts = FormatOptions {
        mode: Mode::Latex,
        ..Default::default()
    };
    let out = format("2.5", &["+0.3", "-0.2"], &opts).unwrap();
    assert_eq!(out, "2.5 \\,^{+0.30} _{-0.20}");
}

#[test]
fn asymmetric_pair_in_typst() {
    let opts = FormatOptions {
        mode: Mode::Typst,
        ..Default::default()
    };
    let out = format("2.5", &["+0.3", "-0.2"], &opts).unwrap();
    assert_eq!(out, "2.5 #h(0.0em)^(+0.30) _(-0.20)");
}

#[test]
fn rounding_to_the_total_error() {
    let opts = FormatOptions {
        precision: PrecisionPolicy::TotalError,
        ..Default::default()
    };
    // sqrt(0.12^2 + 0.34^2) ~ 0.36, PDG-reduced to one digit
    let out = format("10.00", &["0.12", "0.34"], &opts).unwrap();
    assert_eq!(out, "10.0 ± 0.1 ± 0.3");
}

#[test]
fn two_digit_rounding_keeps_matching_precision() {
    let opts = FormatOptions {
        algo: RoundAlgo::TwoDigit,
        ..Default::default()
    };
    let out = format("1.234", &["0.0567"], &opts).unwrap();
    assert_eq!(out, "1.234 ± 0.057");
}

#[test]
fn symmetrized_pair_collapses_to_plus_minus() {
    let opts = FormatOptions {
        symmetrize: true,
        ..Default::default()
    };
    let out = format("2.5", &["+0.11", "-0.11"], &opts).unwrap();
    assert_eq!(out, "2.5 ± 0.11");
}

#[test]
fn distant_pair_survives_symmetrization() {
    let opts = FormatOptions {
        symmetrize: true,
        ..Default::default()
    };
    let out = format("2.5", &["+0.12", "-0.10"], &opts).unwrap();
    assert_eq!(out, "2.5 +0.12 -0.10");
}

#[test]
fn factorized_measurement_shares_one_power() {
    let opts = FormatOptions {
        factorize_powers: true,
        ..Default::default()
    };
    let out = format("0.00123", &["0.00056"], &opts).unwrap();
    assert_eq!(out, "(12 ± 6)×10^-4");
}

#[test]
fn labels_follow_their_uncertainties() {
    let opts = FormatOptions {
        labels: vec!["stat".to_string(), "syst".to_string()],
        ..Default::default()
    };
    let out = format("5.0", &["0.1", "0.2"], &opts).unwrap();
    assert_eq!(out, "5.0 ± 0.10 stat ± 0.20 syst");
}

#[test]
fn ascii_only_output() {
    let opts = FormatOptions {
        ascii_only: true,
        ..Default::default()
    };
    let out = format("1.5", &["0.23"], &opts).unwrap();
    assert_eq!(out, "1.5 +/- 0.23");
}

#[test]
fn trailing_newline_on_request() {
    let opts = FormatOptions {
        trailing_newline: true,
        ..Default::default()
    };
    let out = format("1.5", &["0.23"], &opts).unwrap();
    assert_eq!(out, "1.5 ± 0.23\n");
}

#[test]
fn central_value_alone_is_reduced_independently() {
    let out = format("1.234", &[] as &[&str], &FormatOptions::default()).unwrap();
    assert_eq!(out, "1.2");
}

#[test]
fn numeric_entry_points_agree_with_text() {
    let text = format("1.5", &["0.23"], &FormatOptions::default()).unwrap();
    let values = uf_render::format_values(1.5, &[0.23], &FormatOptions::default()).unwrap();
    assert_eq!(text, values);
}

#[test]
fn malformed_input_fails_the_whole_call() {
    let err = format("1.2.3", &["0.1"], &FormatOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));

    let err = format("1.5", &["0.2x"], &FormatOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::Parse(_)));
}
