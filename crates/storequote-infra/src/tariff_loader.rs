//! Tariff loader for TOML configuration

use std::fs;
use std::path::Path;

use storequote_domain::model::Tariff;
use storequote_types::{ConfigError, Error, Result};

/// A validated tariff read from TOML
#[derive(Debug, Clone)]
pub struct TariffLoader {
    tariff: Tariff,
}

impl TariffLoader {
    /// Load a tariff from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read tariff file: {}",
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        log::info!("loaded tariff from {}", path.display());
        Ok(loader)
    }

    /// Load a tariff from a TOML string; omitted sections keep their defaults
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let tariff: Tariff = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse tariff TOML: {}",
                e
            )))
        })?;
        tariff.validate()?;
        Ok(Self { tariff })
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn into_tariff(self) -> Tariff {
        self.tariff
    }

    /// Render a tariff as TOML, e.g. to seed an editable tariff file
    pub fn to_toml_string(tariff: &Tariff) -> Result<String> {
        toml::to_string_pretty(tariff).map_err(|e| {
            Error::Config(ConfigError::SaveError(format!(
                "Failed to serialize tariff: {}",
                e
            )))
        })
    }
}
