//! Tariff repositories backed by a TOML file or the built-in tariff

use std::path::{Path, PathBuf};

use storequote_domain::model::Tariff;
use storequote_domain::repository::TariffRepository;
use storequote_types::Error;

use crate::tariff_loader::TariffLoader;

/// File-based tariff repository (TOML)
pub struct FileTariffRepository {
    toml_path: PathBuf,
    loader: TariffLoader,
}

impl FileTariffRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = TariffLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &Path {
        &self.toml_path
    }

    /// Reload the tariff from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = TariffLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }
}

impl TariffRepository for FileTariffRepository {
    fn load(&self) -> Result<Tariff, Error> {
        Ok(self.loader.tariff().clone())
    }

    fn source(&self) -> String {
        self.toml_path.display().to_string()
    }
}

/// The published tariff compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinTariffRepository;

impl TariffRepository for BuiltinTariffRepository {
    fn load(&self) -> Result<Tariff, Error> {
        Ok(Tariff::default())
    }

    fn source(&self) -> String {
        "built-in".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_repository_loads_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tariff.toml");
        fs::write(&path, "[household]\nincluded_km = 7.0\n").unwrap();

        let mut repo = FileTariffRepository::new(path.clone()).unwrap();
        assert_eq!(repo.load().unwrap().household.included_km, 7.0);
        assert_eq!(repo.source(), path.display().to_string());

        fs::write(&path, "[household]\nincluded_km = 3.0\n").unwrap();
        repo.reload().unwrap();
        assert_eq!(repo.load().unwrap().household.included_km, 3.0);
    }

    #[test]
    fn test_missing_tariff_file() {
        let result = FileTariffRepository::new(PathBuf::from("/nonexistent/tariff.toml"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_builtin_repository() {
        let repo = BuiltinTariffRepository;
        assert_eq!(repo.load().unwrap(), Tariff::default());
        assert_eq!(repo.source(), "built-in");
    }
}
