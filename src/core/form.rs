use crate::core::estimator::estimate_catchment;
use crate::core::rainfall::RainfallPipeline;
use crate::core::{ClimateSource, LocationResolver, PostalCode};
use serde::{Deserialize, Serialize};

pub const PROMPT_ZIP: &str = "Please enter a ZIP code.";
pub const ALERT_LOOKUP_FAILED: &str = "Could not fetch rainfall data. Try another ZIP.";
pub const INVALID_NUMBERS: &str = "Please enter valid numbers.";
pub const AREA_HINT: &str = "Enter the catchment area in square feet to estimate the yearly harvest.";

/// The calculator's input and output fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestForm {
    pub zip: String,
    /// Catchment area in square feet.
    pub area: String,
    /// Annual rainfall in inches; filled by a lookup, editable afterwards.
    pub rainfall: String,
    pub result: String,
}

/// What the user sees after requesting a rainfall lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// No ZIP code entered; nothing was requested.
    Prompted(String),
    /// The rainfall field now holds this value.
    Populated(String),
    /// The lookup failed and the rainfall field was left untouched.
    Alerted(String),
}

impl HarvestForm {
    pub fn new(zip: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            zip: zip.into(),
            area: area.into(),
            ..Self::default()
        }
    }

    /// Resolves the ZIP code and fills the rainfall field, or leaves it
    /// unchanged on any failure.
    pub async fn fetch_rainfall<L, C>(&mut self, pipeline: &RainfallPipeline<L, C>) -> LookupOutcome
    where
        L: LocationResolver,
        C: ClimateSource,
    {
        let postal_code = match PostalCode::parse(&self.zip) {
            Ok(code) => code,
            Err(_) => {
                tracing::warn!("Rainfall lookup requested without a ZIP code");
                return LookupOutcome::Prompted(PROMPT_ZIP.to_string());
            }
        };

        match pipeline.annual_rainfall(&postal_code).await {
            Ok(report) => {
                self.rainfall = report.annual.to_string();
                LookupOutcome::Populated(self.rainfall.clone())
            }
            Err(e) if e.is_lookup_failure() => {
                tracing::error!(
                    "Rainfall lookup for ZIP {} failed: {} (Category: {:?})",
                    postal_code,
                    e,
                    e.category()
                );
                LookupOutcome::Alerted(ALERT_LOOKUP_FAILED.to_string())
            }
            Err(e) => {
                tracing::warn!("Rainfall lookup for ZIP {} not started: {}", postal_code, e);
                LookupOutcome::Alerted(e.user_friendly_message())
            }
        }
    }

    /// Lines reported once the rainfall field is settled: the rainfall itself,
    /// then the estimate, or a hint when no area was entered.
    pub fn summary(&mut self) -> Vec<String> {
        let rainfall = format!("Average annual rainfall: {} inches", self.rainfall);
        if self.area.is_empty() {
            return vec![rainfall, AREA_HINT.to_string()];
        }
        vec![rainfall, self.calculate_catchment().to_string()]
    }

    /// Writes the harvest estimate, or the validation message, into `result`.
    pub fn calculate_catchment(&mut self) -> &str {
        self.result = match estimate_catchment(&self.area, &self.rainfall) {
            Ok(estimate) => estimate.describe(),
            Err(e) => {
                tracing::warn!("Catchment estimate rejected: {}", e);
                INVALID_NUMBERS.to_string()
            }
        };
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_catchment_writes_sentence() {
        let mut form = HarvestForm {
            area: "1000".to_string(),
            rainfall: "23.6".to_string(),
            ..HarvestForm::default()
        };

        assert_eq!(
            form.calculate_catchment(),
            "You can harvest approximately 14703 gallons of rainwater per year."
        );
        assert_eq!(
            form.result,
            "You can harvest approximately 14703 gallons of rainwater per year."
        );
    }

    #[test]
    fn test_calculate_catchment_with_bad_area() {
        let mut form = HarvestForm {
            area: "abc".to_string(),
            rainfall: "23.6".to_string(),
            ..HarvestForm::default()
        };

        assert_eq!(form.calculate_catchment(), INVALID_NUMBERS);
        assert!(!form.result.contains("gallons"));
    }

    #[test]
    fn test_calculate_catchment_recovers_after_reentry() {
        let mut form = HarvestForm::new("", "");
        form.rainfall = "20".to_string();
        assert_eq!(form.calculate_catchment(), INVALID_NUMBERS);

        form.area = "100".to_string();
        assert_eq!(
            form.calculate_catchment(),
            "You can harvest approximately 1246 gallons of rainwater per year."
        );
    }

    #[test]
    fn test_summary_without_area_echoes_rainfall() {
        let mut form = HarvestForm::default();
        form.rainfall = "31.5".to_string();

        assert_eq!(
            form.summary(),
            vec![
                "Average annual rainfall: 31.5 inches".to_string(),
                AREA_HINT.to_string()
            ]
        );
        assert!(form.result.is_empty());
    }

    #[test]
    fn test_summary_with_area_includes_estimate() {
        let mut form = HarvestForm::new("", "1000");
        form.rainfall = "23.6".to_string();

        let lines = form.summary();

        assert_eq!(lines[0], "Average annual rainfall: 23.6 inches");
        assert_eq!(
            lines[1],
            "You can harvest approximately 14703 gallons of rainwater per year."
        );
        assert_eq!(form.result, lines[1]);
    }

    #[test]
    fn test_calculate_catchment_is_idempotent() {
        let mut form = HarvestForm::new("", "2400");
        form.rainfall = "37.9".to_string();

        let first = form.calculate_catchment().to_string();
        let second = form.calculate_catchment().to_string();
        assert_eq!(first, second);
    }
}
