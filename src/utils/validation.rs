use crate::utils::error::{HarvestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(HarvestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(HarvestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks a climatology window: both years in range and `start <= end`.
pub fn validate_year_span(start_year: i32, end_year: i32) -> Result<()> {
    validate_range("climate.start_year", start_year, 1950, 2050)?;
    validate_range("climate.end_year", end_year, 1950, 2050)?;
    if start_year > end_year {
        return Err(HarvestError::InvalidConfigValueError {
            field: "climate.start_year".to_string(),
            value: start_year.to_string(),
            reason: format!("Start year must not be after end year {}", end_year),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("location.endpoint", "https://api.zippopotam.us").is_ok());
        assert!(validate_url("location.endpoint", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("location.endpoint", "").is_err());
        assert!(validate_url("location.endpoint", "invalid-url").is_err());
        assert!(validate_url("location.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("climate.model", "ERA5").is_ok());
        assert!(validate_non_empty_string("climate.model", "   ").is_err());
    }

    #[test]
    fn test_validate_year_span() {
        assert!(validate_year_span(1991, 2020).is_ok());
        assert!(validate_year_span(2000, 2000).is_ok());
        assert!(validate_year_span(2020, 1991).is_err());
        assert!(validate_year_span(1800, 2020).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("request.timeout_seconds", 10, 1).is_ok());
        assert!(validate_positive_number("request.timeout_seconds", 0, 1).is_err());
    }
}
