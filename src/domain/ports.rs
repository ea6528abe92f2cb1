use crate::domain::model::{Coordinate, MonthlyPrecipitation, PostalCode};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn location_endpoint(&self) -> &str;
    fn country_code(&self) -> &str;
    fn climate_endpoint(&self) -> &str;
    fn climate_model(&self) -> &str;
    fn start_year(&self) -> i32;
    fn end_year(&self) -> i32;
    /// `None` leaves requests without a timeout.
    fn timeout_seconds(&self) -> Option<u64>;
}

/// Maps a postal code to the coordinates of its first listed place.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, postal_code: &PostalCode) -> Result<Coordinate>;
}

/// Fetches the monthly precipitation climatology for a point.
#[async_trait]
pub trait ClimateSource: Send + Sync {
    async fn monthly_precipitation(&self, coordinate: Coordinate) -> Result<MonthlyPrecipitation>;
}
