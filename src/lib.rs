pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{OpenMeteoClimate, ZippopotamResolver};
pub use core::{
    estimator::estimate_catchment,
    form::{HarvestForm, LookupOutcome},
    rainfall::{HttpRainfallPipeline, RainfallPipeline, RainfallReport},
};
pub use utils::error::{HarvestError, Result};
