/// Significant digits used when nothing else is asked for.
pub const DEFAULT_PRECISION: usize = 10;

/// Enough digits to round-trip any `f64`. Larger requests are clamped.
pub const MAX_PRECISION: usize = 17;

/// Renders `x` the way `printf("%.*g")` does: `precision` significant digits,
/// fixed or scientific notation depending on the exponent, and no trailing
/// zeros. `precision` is clamped to `1..=MAX_PRECISION`.
pub fn format_number(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        let s = if x < 0.0 { "-inf" } else { "inf" };
        return s.to_owned();
    }
    let p = precision.clamp(1, MAX_PRECISION);
    // The exponent has to be taken after rounding to `p` digits,
    // so 9.9999999999 becomes 1e1 rather than 9.99...e0.
    let sci = format!("{:.*e}", p - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (p as i32 - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, x)).to_owned()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod display_tests {
    use super::*;
    use expect_test::{expect, Expect};

    fn check_display(input: f64, expect: Expect) {
        expect.assert_eq(&format_number(input, DEFAULT_PRECISION))
    }

    #[test]
    fn display_integers() {
        check_display(14.0, expect!["14"]);
        check_display(-5.0, expect!["-5"]);
        check_display(0.0, expect!["0"]);
        check_display(1234567890.0, expect!["1234567890"]);
    }

    #[test]
    fn display_fractions() {
        check_display(0.1 + 0.2, expect!["0.3"]);
        check_display(1.0 / 3.0, expect!["0.3333333333"]);
        check_display(-2.5, expect!["-2.5"]);
        check_display(std::f64::consts::SQRT_2, expect!["1.414213562"]);
        check_display(0.0001, expect!["0.0001"]);
        check_display(9.99999999999, expect!["10"]);
    }

    #[test]
    fn display_exponents() {
        // cutoffs for e notation
        check_display(12345678901.0, expect!["1.23456789e+10"]);
        check_display(1e20, expect!["1e+20"]);
        check_display(0.00001, expect!["1e-05"]);
        check_display(-1.5e-300, expect!["-1.5e-300"]);
    }

    #[test]
    fn display_special() {
        check_display(f64::INFINITY, expect!["inf"]);
        check_display(f64::NEG_INFINITY, expect!["-inf"]);
        check_display(f64::NAN, expect!["nan"]);
    }

    #[test]
    fn display_precision() {
        assert_eq!(format_number(std::f64::consts::PI, 3), "3.14");
        assert_eq!(format_number(1234.0, 3), "1.23e+03");
        assert_eq!(format_number(2.0 / 3.0, 0), "0.7");
        assert_eq!(format_number(std::f64::consts::PI, 17), "3.1415926535897931");
    }

    #[test]
    fn precision_is_clamped() {
        assert_eq!(format_number(1.5, 70_000), "1.5");
        assert_eq!(format_number(1.0 / 3.0, usize::MAX), "0.33333333333333331");
        assert_eq!(format_number(1.0 / 3.0, 0), format_number(1.0 / 3.0, 1));
    }
}
