//! Repository adapters for persistence layer

use std::path::{Path, PathBuf};

use storequote_domain::model::Tariff;
use storequote_domain::repository::TariffRepository;
use storequote_infra::persistence::{BuiltinTariffRepository, FileTariffRepository};
use storequote_types::Result;

use crate::config::Config;

/// Open the tariff repository: explicit path first, then config, then built-in
pub fn open_tariff_repo(config: &Config, tariff_override: Option<&Path>) -> Result<Box<dyn TariffRepository>> {
    let path = tariff_override
        .map(Path::to_path_buf)
        .or_else(|| config.tariff_path.clone());
    match path {
        Some(path) => Ok(Box::new(open_file_tariff_repo(path)?)),
        None => Ok(Box::new(BuiltinTariffRepository)),
    }
}

/// Open tariff repository from TOML
pub fn open_file_tariff_repo(toml_path: PathBuf) -> Result<FileTariffRepository> {
    FileTariffRepository::new(toml_path)
}

/// Resolve and load the tariff in one step
pub fn load_tariff(config: &Config, tariff_override: Option<&Path>) -> Result<Tariff> {
    let repo = open_tariff_repo(config, tariff_override)?;
    let tariff = repo.load()?;
    log::debug!("using tariff from {}", repo.source());
    Ok(tariff)
}
