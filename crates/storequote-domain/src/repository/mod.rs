//! Repository trait definitions for tariff sources

use storequote_types::Error;

use crate::model::Tariff;

/// Source of the tariff used for pricing
pub trait TariffRepository {
    /// Load and validate the tariff
    fn load(&self) -> Result<Tariff, Error>;

    /// Human-readable origin (file path or "built-in")
    fn source(&self) -> String;
}
