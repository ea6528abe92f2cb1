use crate::adapters::{open_meteo, zippopotam};
use crate::config::{validate_provider, TomlConfig};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rain-harvest")]
#[command(about = "Estimate how much rainwater a roof can collect in a year")]
pub struct CliConfig {
    /// ZIP code used to look up the 30-year average rainfall
    #[arg(long, default_value = "")]
    pub zip: String,

    /// Catchment (roof) area in square feet
    #[arg(long)]
    pub area: Option<String>,

    /// Annual rainfall in inches; skips the lookup when given
    #[arg(long)]
    pub rainfall: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Country code of the postal code directory
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub location_endpoint: Option<String>,

    #[arg(long)]
    pub climate_endpoint: Option<String>,

    /// Climate reanalysis model
    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn location_endpoint(&self) -> &str {
        self.location_endpoint
            .as_deref()
            .unwrap_or(zippopotam::DEFAULT_ENDPOINT)
    }

    fn country_code(&self) -> &str {
        self.country.as_deref().unwrap_or(zippopotam::DEFAULT_COUNTRY)
    }

    fn climate_endpoint(&self) -> &str {
        self.climate_endpoint
            .as_deref()
            .unwrap_or(open_meteo::DEFAULT_ENDPOINT)
    }

    fn climate_model(&self) -> &str {
        self.model.as_deref().unwrap_or(open_meteo::DEFAULT_MODEL)
    }

    fn start_year(&self) -> i32 {
        open_meteo::DEFAULT_START_YEAR
    }

    fn end_year(&self) -> i32 {
        open_meteo::DEFAULT_END_YEAR
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl CliConfig {
    /// Flags given on the command line win over the configuration file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(endpoint) = &self.location_endpoint {
            config.location.endpoint = endpoint.clone();
        }
        if let Some(country) = &self.country {
            config.location.country = country.clone();
        }
        if let Some(endpoint) = &self.climate_endpoint {
            config.climate.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.climate.model = model.clone();
        }
        if self.timeout_seconds.is_some() {
            config.request.timeout_seconds = self.timeout_seconds;
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
