//! Records, request payloads and catalog queries.

pub mod patch;
pub mod product;
pub mod temperature;
pub mod user;

use validator::Validate;

use crate::error::{ExplorerError, Result};

pub use patch::Patch;
pub use product::{Product, ProductPage, ProductPatch, ProductQuery};
pub use temperature::{
    NewReading, RepositoryStats, SensorSummary, TemperatureListing, TemperatureQuery,
    TemperatureReading,
};
pub use user::User;

/// Schema checks run by the extractor layer after deserialization.
pub trait Schema {
    fn check(&self) -> Result<()>;
}

impl<T: Validate> Schema for T {
    fn check(&self) -> Result<()> {
        self.validate().map_err(ExplorerError::from)
    }
}

/// Round to two decimals, as reported in statistics.
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
