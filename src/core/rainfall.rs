use crate::adapters::{build_client, OpenMeteoClimate, ZippopotamResolver};
use crate::core::{
    AnnualRainfallInches, ClimateSource, ConfigProvider, Coordinate, LocationResolver,
    MonthlyPrecipitation, PostalCode,
};
use crate::utils::error::{HarvestError, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Everything learned during one postal code → rainfall lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallReport {
    pub postal_code: PostalCode,
    pub coordinate: Coordinate,
    pub monthly: MonthlyPrecipitation,
    pub annual: AnnualRainfallInches,
}

/// Chains the location resolver into the climate lookup.
///
/// At most one lookup runs per pipeline; a trigger that arrives while another
/// is pending is rejected with [`HarvestError::LookupInProgress`].
pub struct RainfallPipeline<L: LocationResolver, C: ClimateSource> {
    resolver: L,
    climate: C,
    in_flight: AtomicBool,
}

pub type HttpRainfallPipeline = RainfallPipeline<ZippopotamResolver, OpenMeteoClimate>;

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| HarvestError::LookupInProgress)?;
        Ok(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L: LocationResolver, C: ClimateSource> RainfallPipeline<L, C> {
    pub fn new(resolver: L, climate: C) -> Self {
        Self {
            resolver,
            climate,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn annual_rainfall(&self, postal_code: &PostalCode) -> Result<RainfallReport> {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        let coordinate = self.resolver.resolve(postal_code).await?;
        let monthly = self.climate.monthly_precipitation(coordinate).await?;
        let annual = monthly.annual_rainfall();

        tracing::info!(
            "ZIP {} at {}: {:.1} mm/year, {} in/year",
            postal_code,
            coordinate,
            monthly.total_mm(),
            annual
        );

        Ok(RainfallReport {
            postal_code: postal_code.clone(),
            coordinate,
            monthly,
            annual,
        })
    }
}

impl HttpRainfallPipeline {
    pub fn from_config<P: ConfigProvider>(config: &P) -> Result<Self> {
        let client = build_client(config.timeout_seconds())?;
        Ok(Self::new(
            ZippopotamResolver::from_config(client.clone(), config),
            OpenMeteoClimate::from_config(client, config),
        ))
    }
}
