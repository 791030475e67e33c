//! Domain model types

pub mod document_rates;
pub mod inventory;
pub mod tariff;
pub mod vehicle_tier;

pub use document_rates::{BucketTable, DocumentRateMatrix, RateColumn, StoragePeriod};
pub use inventory::PooledInventory;
pub use tariff::{
    BoxVolumeRates, BucketRates, DocumentTariff, DurationTable, GenericTariff, HouseholdTariff,
    LabourPolicy, SizeRates, StorageTypeMultipliers, Tariff,
};
pub use vehicle_tier::VehicleTier;
