use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{city::City, provider::openmeteo::DEFAULT_BASE_URL};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "London"
/// base_url = "https://api.open-meteo.com/v1/forecast"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Name of one of the predefined cities, e.g. "Tokyo".
    pub default_city: Option<String>,

    /// Forecast endpoint. Falls back to the public Open-Meteo API.
    pub base_url: Option<String>,
}

impl Config {
    /// The configured default city, or the first predefined one if unset.
    pub fn default_city(&self) -> Result<&'static City> {
        let Some(name) = self.default_city.as_deref() else {
            return Ok(City::default_city());
        };

        <&City>::try_from(name).context(
            "Invalid default city in config.\n\
             Hint: run `forecast configure` to pick one of the supported cities.",
        )
    }

    pub fn set_default_city(&mut self, city: &City) {
        self.default_city = Some(city.name.to_string());
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml = self.to_toml()?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_city_falls_back_to_first_city() {
        let cfg = Config::default();
        let city = cfg.default_city().expect("fallback must exist");

        assert_eq!(city, City::default_city());
    }

    #[test]
    fn default_city_errors_on_unknown_name() {
        let cfg = Config { default_city: Some("Atlantis".into()), ..Default::default() };
        let err = cfg.default_city().unwrap_err();

        let msg = format!("{err:#}");
        assert!(msg.contains("Invalid default city"));
        assert!(msg.contains("Unknown city 'Atlantis'"));
    }

    #[test]
    fn set_default_city_overrides_default() {
        let mut cfg = Config::default();
        let sydney = City::find("sydney").unwrap();

        cfg.set_default_city(sydney);

        assert_eq!(cfg.default_city.as_deref(), Some("Sydney"));
        assert_eq!(cfg.default_city().unwrap(), sydney);
    }

    #[test]
    fn base_url_falls_back_to_open_meteo() {
        let cfg = Config::default();
        assert_eq!(cfg.base_url(), "https://api.open-meteo.com/v1/forecast");

        let cfg = Config { base_url: Some("http://127.0.0.1:8080/forecast".into()), ..Default::default() };
        assert_eq!(cfg.base_url(), "http://127.0.0.1:8080/forecast");
    }

    #[test]
    fn toml_roundtrip_keeps_fields() {
        let mut cfg = Config::default();
        cfg.set_default_city(City::find("London").unwrap());

        let parsed = Config::from_toml(&cfg.to_toml().unwrap()).unwrap();

        assert_eq!(parsed.default_city.as_deref(), Some("London"));
        assert!(parsed.base_url.is_none());
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert!(cfg.default_city.is_none());
        assert!(cfg.base_url.is_none());
    }
}
