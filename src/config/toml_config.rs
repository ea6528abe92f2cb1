use crate::adapters::{open_meteo, zippopotam};
use crate::config::validate_provider;
use crate::core::ConfigProvider;
use crate::utils::error::{HarvestError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub location: LocationConfig,
    pub climate: ClimateConfig,
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub endpoint: String,
    pub country: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            endpoint: zippopotam::DEFAULT_ENDPOINT.to_string(),
            country: zippopotam::DEFAULT_COUNTRY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    pub endpoint: String,
    pub model: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            endpoint: open_meteo::DEFAULT_ENDPOINT.to_string(),
            model: open_meteo::DEFAULT_MODEL.to_string(),
            start_year: open_meteo::DEFAULT_START_YEAR,
            end_year: open_meteo::DEFAULT_END_YEAR,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HarvestError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value; unknown variables
    /// are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HarvestError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn location_endpoint(&self) -> &str {
        &self.location.endpoint
    }

    fn country_code(&self) -> &str {
        &self.location.country
    }

    fn climate_endpoint(&self) -> &str {
        &self.climate.endpoint
    }

    fn climate_model(&self) -> &str {
        &self.climate.model
    }

    fn start_year(&self) -> i32 {
        self.climate.start_year
    }

    fn end_year(&self) -> i32 {
        self.climate.end_year
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.request.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
