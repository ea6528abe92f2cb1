// Adapters layer: HTTP clients for the external directory and climate services.

pub mod open_meteo;
pub mod zippopotam;

pub use open_meteo::OpenMeteoClimate;
pub use zippopotam::ZippopotamResolver;

use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("rain-harvest/", env!("CARGO_PKG_VERSION"));

/// Builds the shared HTTP client. Without `timeout_seconds` requests wait
/// indefinitely.
pub fn build_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}
