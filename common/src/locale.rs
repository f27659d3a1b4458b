//! German number and calendar conventions used by the form and the CSV export.
//!
//! Lens parameters are typed and exported with a decimal comma (`-1,25`),
//! while the JSON payload carries plain numbers. Delivery dates picked in the
//! form travel as calendar week numbers and are written as `"<week>, <year>"`.

use chrono::{Datelike, NaiveDate};

/// Parses a decimal typed with either a comma or a dot as separator.
///
/// Accepts an optional sign and at most one separator. Empty input,
/// exponents, thousands separators and non-finite values yield `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    if normalized.matches('.').count() > 1 {
        return None;
    }
    let unsigned = normalized
        .strip_prefix(['+', '-'])
        .unwrap_or(&normalized);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if !unsigned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Renders a number with a decimal comma and no trailing zeros.
pub fn format_decimal(value: f64) -> String {
    // -0 would otherwise print with its sign
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string().replace('.', ",")
}

/// Rewrites user input into its decimal-comma display form (`"1.25"` -> `"1,25"`).
///
/// Returns `None` when the input is not a number, so the caller can keep
/// the raw text and let validation flag it.
pub fn normalize_decimal_input(raw: &str) -> Option<String> {
    parse_decimal(raw).map(format_decimal)
}

/// Calendar week (ISO 8601) of a delivery date.
pub fn delivery_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

pub fn format_delivery_week(week: u32, year: i32) -> String {
    format!("{week}, {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_and_dot() {
        assert_eq!(parse_decimal("1,25"), Some(1.25));
        assert_eq!(parse_decimal(" 1.25 "), Some(1.25));
        assert_eq!(parse_decimal("-0,75"), Some(-0.75));
        assert_eq!(parse_decimal("+3"), Some(3.0));
        assert_eq!(parse_decimal(",5"), Some(0.5));
    }

    #[test]
    fn rejects_malformed_numbers() {
        for raw in ["", "  ", "abc", "1,2,3", "1.000,5", "1e3", "-", ",", "inf", "NaN", "1 5"] {
            assert_eq!(parse_decimal(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn formats_with_decimal_comma() {
        assert_eq!(format_decimal(1.25), "1,25");
        assert_eq!(format_decimal(-2.0), "-2");
        assert_eq!(format_decimal(180.0), "180");
        assert_eq!(format_decimal(-0.0), "0");
        assert_eq!(format_decimal(22.5), "22,5");
    }

    #[test]
    fn dot_input_normalizes_and_round_trips() {
        let shown = normalize_decimal_input("1.25").unwrap();
        assert_eq!(shown, "1,25");
        assert_eq!(parse_decimal(&shown), Some(1.25));
        assert_eq!(normalize_decimal_input("x"), None);
    }

    #[test]
    fn delivery_week_matches_iso_calendar() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(delivery_week(monday), 11);
        // Sunday still belongs to the week that started on Monday
        assert_eq!(delivery_week(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap()), 11);
        assert_eq!(delivery_week(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), 1);
        assert_eq!(delivery_week(NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()), 53);
    }

    #[test]
    fn week_is_rendered_with_year() {
        assert_eq!(format_delivery_week(11, 2025), "11, 2025");
    }
}
