//! Infrastructure layer for storequote
//!
//! File formats and repository implementations:
//! - TOML tariff files
//! - JSON wizard forms and callback requests
//! - File-backed and built-in tariff repositories

pub mod form_loader;
pub mod persistence;
pub mod tariff_loader;

pub use form_loader::{load_callback, load_form, parse_form};
pub use persistence::{BuiltinTariffRepository, FileTariffRepository};
pub use tariff_loader::TariffLoader;
