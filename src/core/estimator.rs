use crate::core::CatchmentEstimate;
use crate::utils::error::{HarvestError, Result};

fn scan_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Longest leading decimal literal of `text`: optional sign, digits with an
/// optional fraction, optional exponent. Empty when `text` does not start
/// with a number.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = scan_digits(bytes, end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = scan_digits(bytes, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &text[..end]
}

/// Reads a form field the way a browser's `parseFloat` does: leading
/// whitespace is skipped and trailing text such as units is ignored, so
/// "12 ft" reads as 12 and "1,500" as 1.
fn parse_number(field: &str, raw: &str) -> Result<f64> {
    numeric_prefix(raw.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| HarvestError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Parses the area (square feet) and rainfall (inches) fields and estimates the
/// yearly harvest. Pure: the same inputs always give the same estimate.
pub fn estimate_catchment(area: &str, rainfall: &str) -> Result<CatchmentEstimate> {
    let area_sqft = parse_number("area", area)?;
    let rainfall_inches = parse_number("rainfall", rainfall)?;
    Ok(CatchmentEstimate::compute(area_sqft, rainfall_inches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_from_text_fields() {
        let estimate = estimate_catchment("1000", "23.6").unwrap();
        assert_eq!(estimate.rounded_gallons(), 14703.0);
        assert_eq!(
            estimate.describe(),
            "You can harvest approximately 14703 gallons of rainwater per year."
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let estimate = estimate_catchment(" 1500 ", "\t30\n").unwrap();
        assert_eq!(estimate.rounded_gallons(), (1500.0_f64 * 30.0 * 0.623).round());
    }

    #[test]
    fn test_non_numeric_inputs_are_rejected() {
        for (area, rainfall, bad_field) in [
            ("abc", "23.6", "area"),
            ("", "23.6", "area"),
            ("1000", "", "rainfall"),
            ("1000", "lots", "rainfall"),
            ("NaN", "1", "area"),
            ("1000", "inf", "rainfall"),
        ] {
            match estimate_catchment(area, rainfall) {
                Err(HarvestError::InvalidNumber { field, .. }) => assert_eq!(field, bad_field),
                other => panic!("expected InvalidNumber for ({area:?}, {rainfall:?}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        let estimate = estimate_catchment("1000 sqft", "23.6 in/yr").unwrap();
        assert_eq!(estimate.rounded_gallons(), 14703.0);

        assert_eq!(estimate_catchment("12 ft", "1").unwrap().area_sqft, 12.0);
        assert_eq!(estimate_catchment("1,500", "1").unwrap().area_sqft, 1.0);
    }

    #[test]
    fn test_numeric_prefix_forms() {
        assert_eq!(numeric_prefix("12 ft"), "12");
        assert_eq!(numeric_prefix("1,500"), "1");
        assert_eq!(numeric_prefix("-3.5e2x"), "-3.5e2");
        assert_eq!(numeric_prefix("2e"), "2");
        assert_eq!(numeric_prefix("4.e+1"), "4.e+1");
        assert_eq!(numeric_prefix(".5."), ".5");
        assert_eq!(numeric_prefix("7."), "7.");
        assert_eq!(numeric_prefix("+."), "");
        assert_eq!(numeric_prefix("abc"), "");
        assert_eq!(numeric_prefix(""), "");
    }

    #[test]
    fn test_no_leading_number_is_rejected() {
        for raw in ["abc", "ft 12", "-", ".", "e5", "$100"] {
            assert!(
                matches!(
                    estimate_catchment(raw, "10"),
                    Err(HarvestError::InvalidNumber { .. })
                ),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let first = estimate_catchment("850", "41.3").unwrap().describe();
        for _ in 0..5 {
            assert_eq!(estimate_catchment("850", "41.3").unwrap().describe(), first);
        }
    }
}
