use crate::domain::model::{Coordinate, MonthlyPrecipitation};
use crate::domain::ports::{ClimateSource, ConfigProvider};
use crate::utils::error::{HarvestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://climate-api.open-meteo.com/v1/climate";
pub const DEFAULT_MODEL: &str = "ERA5";
pub const DEFAULT_START_YEAR: i32 = 1991;
pub const DEFAULT_END_YEAR: i32 = 2020;

#[derive(Debug, Deserialize)]
struct ClimateResponse {
    #[serde(default)]
    monthly: Option<MonthlySeries>,
}

#[derive(Debug, Deserialize)]
struct MonthlySeries {
    #[serde(default)]
    precipitation_sum: Option<Vec<Option<f64>>>,
}

/// Open-Meteo climate statistics endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoClimate {
    client: Client,
    endpoint: String,
    model: String,
    start_year: i32,
    end_year: i32,
}

impl OpenMeteoClimate {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            model: DEFAULT_MODEL.to_string(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.climate_endpoint())
            .with_model(config.climate_model())
            .with_years(config.start_year(), config.end_year())
    }

    fn query(&self, coordinate: Coordinate) -> [(&'static str, String); 5] {
        [
            ("latitude", coordinate.latitude.to_string()),
            ("longitude", coordinate.longitude.to_string()),
            ("start_year", self.start_year.to_string()),
            ("end_year", self.end_year.to_string()),
            ("models", self.model.clone()),
        ]
    }
}

fn extract_series(response: ClimateResponse) -> Result<MonthlyPrecipitation> {
    let series = response
        .monthly
        .and_then(|m| m.precipitation_sum)
        .ok_or_else(|| HarvestError::InvalidClimateData {
            reason: "response has no monthly precipitation_sum".to_string(),
        })?;

    let values = series
        .into_iter()
        .enumerate()
        .map(|(month, value)| {
            value.ok_or_else(|| HarvestError::InvalidClimateData {
                reason: format!("month {} has no precipitation value", month + 1),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    MonthlyPrecipitation::try_from(values)
}

#[async_trait]
impl ClimateSource for OpenMeteoClimate {
    async fn monthly_precipitation(&self, coordinate: Coordinate) -> Result<MonthlyPrecipitation> {
        tracing::debug!(
            "Requesting {}-{} {} climatology at {} from {}",
            self.start_year,
            self.end_year,
            self.model,
            coordinate,
            self.endpoint
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query(coordinate))
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("Climate service response status: {}", status);

        if !status.is_success() {
            return Err(HarvestError::InvalidClimateData {
                reason: format!("climate service returned HTTP {}", status.as_u16()),
            });
        }

        let body = response.text().await?;
        let parsed: ClimateResponse = serde_json::from_str(&body)?;
        extract_series(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const LA: Coordinate = Coordinate {
        latitude: 34.0901,
        longitude: -118.4065,
    };

    fn climate(server: &MockServer) -> OpenMeteoClimate {
        OpenMeteoClimate::new(Client::new(), server.url("/v1/climate"))
    }

    #[tokio::test]
    async fn test_monthly_precipitation_sends_climatology_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/climate")
                .query_param("latitude", "34.0901")
                .query_param("longitude", "-118.4065")
                .query_param("start_year", "1991")
                .query_param("end_year", "2020")
                .query_param("models", "ERA5");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "latitude": 34.1,
                    "longitude": -118.4,
                    "monthly": {
                        "time": ["1991-01"],
                        "precipitation_sum": [50.0, 50.0, 50.0, 50.0, 50.0, 50.0,
                                              50.0, 50.0, 50.0, 50.0, 50.0, 50.0]
                    }
                }));
        });

        let monthly = climate(&server).monthly_precipitation(LA).await.unwrap();

        api_mock.assert();
        assert_eq!(monthly.total_mm(), 600.0);
        assert_eq!(monthly.annual_rainfall().to_string(), "23.6");
    }

    #[tokio::test]
    async fn test_custom_model_and_years_are_forwarded() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/climate")
                .query_param("start_year", "1981")
                .query_param("end_year", "2010")
                .query_param("models", "MRI_AGCM3_2_S");
            then.status(200).json_body(serde_json::json!({
                "monthly": {"precipitation_sum": vec![1.0; 12]}
            }));
        });

        let monthly = climate(&server)
            .with_model("MRI_AGCM3_2_S")
            .with_years(1981, 2010)
            .monthly_precipitation(LA)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(monthly.months(), &[1.0; 12]);
    }

    #[tokio::test]
    async fn test_wrong_length_series_is_invalid() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/climate");
            then.status(200).json_body(serde_json::json!({
                "monthly": {"precipitation_sum": [10.0, 20.0, 30.0]}
            }));
        });

        let err = climate(&server).monthly_precipitation(LA).await.unwrap_err();
        assert!(matches!(err, HarvestError::InvalidClimateData { .. }));
    }

    #[tokio::test]
    async fn test_missing_monthly_block_is_invalid() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/climate");
            then.status(200).json_body(serde_json::json!({"daily": {}}));
        });

        let err = climate(&server).monthly_precipitation(LA).await.unwrap_err();
        assert!(matches!(err, HarvestError::InvalidClimateData { .. }));
    }

    #[tokio::test]
    async fn test_null_month_is_invalid() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/climate");
            then.status(200).json_body(serde_json::json!({
                "monthly": {"precipitation_sum": [1.0, 1.0, null, 1.0, 1.0, 1.0,
                                                  1.0, 1.0, 1.0, 1.0, 1.0, 1.0]}
            }));
        });

        let err = climate(&server).monthly_precipitation(LA).await.unwrap_err();
        match err {
            HarvestError::InvalidClimateData { reason } => assert!(reason.contains("month 3")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_error_status_is_invalid_climate_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/climate");
            then.status(400).json_body(serde_json::json!({
                "error": true,
                "reason": "Parameter 'models' is required"
            }));
        });

        let err = climate(&server).monthly_precipitation(LA).await.unwrap_err();
        assert!(matches!(err, HarvestError::InvalidClimateData { .. }));
    }
}
