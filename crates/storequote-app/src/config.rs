//! Configuration management for storequote
//!
//! Config stored at: ~/.config/storequote/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storequote_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tariff TOML file; the built-in tariff is used when unset
    #[serde(default)]
    pub tariff_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Brand name used in rendered quotes and email subjects
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// Phone number printed on customer emails
    #[serde(default = "default_company_phone")]
    pub company_phone: String,

    /// Address that receives quote and callback notifications
    #[serde(default = "default_office_email")]
    pub office_email: String,

    /// WhatsApp number for share links; the link opens a contact picker when unset
    #[serde(default)]
    pub whatsapp_number: Option<String>,

    /// Days a quote stays valid
    #[serde(default = "default_quote_validity_days")]
    pub quote_validity_days: u32,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_company_name() -> String {
    "Storagians".to_string()
}

fn default_company_phone() -> String {
    "+91 9900056394".to_string()
}

fn default_office_email() -> String {
    "info@storagians.com".to_string()
}

fn default_quote_validity_days() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tariff_path: None,
            output_format: default_output_format(),
            company_name: default_company_name(),
            company_phone: default_company_phone(),
            office_email: default_office_email(),
            whatsapp_number: None,
            quote_validity_days: default_quote_validity_days(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("storequote");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or create default when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Storequote Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Tariff:          {}",
            self.tariff_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Company name:    {}", self.company_name)?;
        writeln!(f, "Company phone:   {}", self.company_phone)?;
        writeln!(f, "Office email:    {}", self.office_email)?;
        writeln!(
            f,
            "WhatsApp number: {}",
            self.whatsapp_number.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Quote validity:  {} days", self.quote_validity_days)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:     {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"company_name": "Acme Storage"}"#).unwrap();
        assert_eq!(config.company_name, "Acme Storage");
        assert_eq!(config.quote_validity_days, 30);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert!(config.tariff_path.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            whatsapp_number: Some("919900056394".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_display_lists_settings() {
        let text = Config::default().to_string();
        assert!(text.contains("(built-in)"));
        assert!(text.contains("30 days"));
    }
}
