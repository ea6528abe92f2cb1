#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

/// Validation shared by every [`ConfigProvider`].
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    validation::validate_url("location.endpoint", config.location_endpoint())?;
    validation::validate_non_empty_string("location.country", config.country_code())?;
    validation::validate_url("climate.endpoint", config.climate_endpoint())?;
    validation::validate_non_empty_string("climate.model", config.climate_model())?;
    validation::validate_year_span(config.start_year(), config.end_year())?;
    if let Some(timeout) = config.timeout_seconds() {
        validation::validate_positive_number("request.timeout_seconds", timeout, 1)?;
    }
    Ok(())
}
