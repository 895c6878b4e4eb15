//! Length value parsing and formatting
//!
//! Board coordinates are stored as decimal text in millimetres. Parsing is a
//! plain `f64` parse; formatting uses the shortest representation that parses
//! back to the same value, so `105.0` is written as `105` and `12.7` stays `12.7`.

/// Parse a length attribute value
pub fn parse_mm(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a length for writing back into an attribute
pub fn format_mm(value: f64) -> String {
    // Avoid emitting "-0"
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mm() {
        assert_eq!(parse_mm("12.7"), Some(12.7));
        assert_eq!(parse_mm(" -3 "), Some(-3.0));
        assert_eq!(parse_mm("1e2"), Some(100.0));
        assert_eq!(parse_mm("abc"), None);
        assert_eq!(parse_mm(""), None);
        assert_eq!(parse_mm("NaN"), None);
        assert_eq!(parse_mm("inf"), None);
    }

    #[test]
    fn test_format_mm() {
        assert_eq!(format_mm(105.0), "105");
        assert_eq!(format_mm(12.7), "12.7");
        assert_eq!(format_mm(-0.0), "0");
        assert_eq!(format_mm(-2.54), "-2.54");
    }

    #[test]
    fn test_format_round_trips() {
        for v in [0.1 + 0.2, 1.0 / 3.0, 205.0, 1e-7, 123456.789] {
            assert_eq!(parse_mm(&format_mm(v)), Some(v));
        }
    }
}
