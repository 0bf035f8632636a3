use std::borrow::Cow;
use std::num::ParseFloatError;

/// Rewrites Fortran double-precision exponent markers (`1.5D-03`) into the
/// standard `E` notation understood by Rust's float parser.
///
/// Tokens without a marker are returned borrowed.
pub fn normalize_exponent(token: &str) -> Cow<'_, str> {
    if token.contains(['D', 'd']) {
        Cow::Owned(token.replace(['D', 'd'], "E"))
    } else {
        Cow::Borrowed(token)
    }
}

pub fn parse_fortran_f64(token: &str) -> Result<f64, ParseFloatError> {
    normalize_exponent(token.trim()).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_exponent_replaces_upper_and_lower_case_markers() {
        assert_eq!(normalize_exponent("1.25D-03"), "1.25E-03");
        assert_eq!(normalize_exponent("-4.0d+02"), "-4.0E+02");
    }

    #[test]
    fn normalize_exponent_borrows_plain_tokens() {
        assert!(matches!(normalize_exponent("0.01"), Cow::Borrowed("0.01")));
        assert!(matches!(normalize_exponent("2.5E-1"), Cow::Borrowed(_)));
    }

    #[test]
    fn parse_fortran_f64_handles_both_notations() {
        assert_eq!(parse_fortran_f64("1.5D-01").unwrap(), 0.15);
        assert_eq!(parse_fortran_f64("1.5E-01").unwrap(), 0.15);
        assert_eq!(parse_fortran_f64(" -76.123456789012 ").unwrap(), -76.123456789012);
    }

    #[test]
    fn parse_fortran_f64_rejects_garbage() {
        assert!(parse_fortran_f64("abc").is_err());
        assert!(parse_fortran_f64("1.0DD2").is_err());
        assert!(parse_fortran_f64("").is_err());
    }
}
