use crate::domain::model::{Coordinate, PostalCode};
use crate::domain::ports::{ConfigProvider, LocationResolver};
use crate::utils::error::{HarvestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://api.zippopotam.us";
pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Debug, Deserialize)]
struct ZipResponse {
    #[serde(default)]
    places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    latitude: Degrees,
    longitude: Degrees,
}

// The directory serves degrees as strings; accept plain numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

impl Degrees {
    fn to_f64(&self, field: &str) -> Result<f64> {
        let value = match self {
            Degrees::Number(n) => *n,
            Degrees::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                HarvestError::ProcessingError {
                    message: format!("{} '{}' is not a number: {}", field, s, e),
                }
            })?,
        };

        if !value.is_finite() {
            return Err(HarvestError::ProcessingError {
                message: format!("{} is not a finite number", field),
            });
        }
        Ok(value)
    }
}

/// Zippopotam.us postal code directory.
#[derive(Debug, Clone)]
pub struct ZippopotamResolver {
    client: Client,
    endpoint: String,
    country: String,
}

impl ZippopotamResolver {
    pub fn new(client: Client, endpoint: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            country: country.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.location_endpoint(), config.country_code())
    }

    // The postal code goes into the path as typed, without escaping.
    fn lookup_url(&self, postal_code: &PostalCode) -> String {
        format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.country,
            postal_code
        )
    }
}

#[async_trait]
impl LocationResolver for ZippopotamResolver {
    async fn resolve(&self, postal_code: &PostalCode) -> Result<Coordinate> {
        let url = self.lookup_url(postal_code);
        tracing::debug!("Resolving postal code via: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Location service response status: {}", status);

        if !status.is_success() {
            return Err(HarvestError::LocationNotFound {
                postal_code: postal_code.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: ZipResponse = serde_json::from_str(&body)?;

        let place = parsed
            .places
            .first()
            .ok_or_else(|| HarvestError::ProcessingError {
                message: format!("no places listed for postal code '{}'", postal_code),
            })?;

        let coordinate = Coordinate {
            latitude: place.latitude.to_f64("latitude")?,
            longitude: place.longitude.to_f64("longitude")?,
        };
        tracing::debug!("Postal code {} resolved to {}", postal_code, coordinate);
        Ok(coordinate)
    }
}
