use crate::utils::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Millimetres to inches.
pub const MM_TO_INCHES: f64 = 0.0393701;

/// Gallons collected per square foot per inch of rain, including the assumed
/// collection efficiency.
pub const GALLONS_PER_SQFT_INCH: f64 = 0.623;

pub const MONTHS_PER_YEAR: usize = 12;

/// A user-supplied postal code, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(HarvestError::MissingInput {
                field: "zip".to_string(),
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// 30-year average precipitation per calendar month, in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPrecipitation([f64; MONTHS_PER_YEAR]);

impl MonthlyPrecipitation {
    pub fn months(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.0
    }

    pub fn total_mm(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn annual_rainfall(&self) -> AnnualRainfallInches {
        AnnualRainfallInches::from_millimeters(self.total_mm())
    }
}

impl TryFrom<Vec<f64>> for MonthlyPrecipitation {
    type Error = HarvestError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        let len = values.len();
        let months: [f64; MONTHS_PER_YEAR] =
            values
                .try_into()
                .map_err(|_| HarvestError::InvalidClimateData {
                    reason: format!("expected {} monthly values, got {}", MONTHS_PER_YEAR, len),
                })?;
        Ok(Self(months))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnnualRainfallInches(f64);

impl AnnualRainfallInches {
    pub fn new(inches: f64) -> Self {
        Self(inches)
    }

    pub fn from_millimeters(mm: f64) -> Self {
        Self(mm * MM_TO_INCHES)
    }

    pub fn inches(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for AnnualRainfallInches {
    // one decimal, the precision written to the rainfall field
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tenths(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchmentEstimate {
    pub area_sqft: f64,
    pub rainfall_inches: f64,
    pub gallons: f64,
}

impl CatchmentEstimate {
    pub fn compute(area_sqft: f64, rainfall_inches: f64) -> Self {
        Self {
            area_sqft,
            rainfall_inches,
            gallons: area_sqft * rainfall_inches * GALLONS_PER_SQFT_INCH,
        }
    }

    pub fn rounded_gallons(&self) -> f64 {
        self.gallons.round()
    }

    pub fn describe(&self) -> String {
        format!(
            "You can harvest approximately {:.0} gallons of rainwater per year.",
            self.rounded_gallons()
        )
    }
}

/// Formats to one decimal from the exact binary value, so 23.65 (stored as
/// 23.6499...) stays "23.6". Exact ties (fraction .25 or .75) round away from
/// zero instead of to even.
fn format_tenths(value: f64) -> String {
    // scaling by powers of two is exact
    let is_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_tie {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
