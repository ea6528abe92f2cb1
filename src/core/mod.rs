pub mod estimator;
pub mod form;
pub mod rainfall;

pub use crate::domain::model::{
    AnnualRainfallInches, CatchmentEstimate, Coordinate, MonthlyPrecipitation, PostalCode,
};
pub use crate::domain::ports::{ClimateSource, ConfigProvider, LocationResolver};
pub use crate::utils::error::Result;
