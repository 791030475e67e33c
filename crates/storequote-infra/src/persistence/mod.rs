//! Persistence implementations
//!
//! Implementations of the domain tariff repository trait.

mod file_tariff_repo;

pub use file_tariff_repo::{BuiltinTariffRepository, FileTariffRepository};
