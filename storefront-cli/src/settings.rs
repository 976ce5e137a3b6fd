//! Console settings.
//!
//! Resolved in layers, later layers winning:
//!
//! 1. built-in defaults
//! 2. `settings.json` in the platform config directory
//! 3. `STOREFRONT_*` environment variables (a `.env` file is read at startup)
//! 4. command-line flags

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::args::Cli;
use crate::paths;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_LOG_LEVEL: &str = "debug";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from every layer.
    pub fn load(cli: &Cli) -> Result<Self, SettingsError> {
        let mut settings = match paths::settings_file() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Override from environment variables, looked up through `lookup`.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), SettingsError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = var("STOREFRONT_API_URL") {
            self.base_url = url;
        }
        if let Some(token) = var("STOREFRONT_TOKEN") {
            self.token = Some(token);
        }
        if let Some(raw) = var("STOREFRONT_TIMEOUT_SECS") {
            self.timeout_secs = parse_number("STOREFRONT_TIMEOUT_SECS", &raw)?;
        }
        if let Some(raw) = var("STOREFRONT_PAGE_SIZE") {
            self.page_size = parse_number("STOREFRONT_PAGE_SIZE", &raw)?;
        }
        if let Some(level) = var("STOREFRONT_LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.base_url = url.clone();
        }
        if let Some(token) = &cli.token {
            self.token = Some(token.clone());
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Reject values that would only fail later.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.timeout_secs == 0 {
            return Err(SettingsError::InvalidValue {
                key: "timeoutSecs",
                value: "0".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(SettingsError::InvalidValue {
                key: "pageSize",
                value: "0".to_string(),
            });
        }
        self.level_filter().map(|_| ())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(self.log_level.trim()).map_err(|_| SettingsError::InvalidValue {
            key: "logLevel",
            value: self.log_level.clone(),
        })
    }
}

fn parse_number<N: FromStr>(key: &'static str, raw: &str) -> Result<N, SettingsError> {
    raw.trim()
        .parse()
        .map_err(|_| SettingsError::InvalidValue {
            key,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use clap::Parser;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_url, "http://localhost:4000/api");
        assert_eq!(settings.timeout(), Duration::from_secs(15));
        assert_eq!(settings.page_size, 10);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "baseUrl": "https://shop.example/api", "pageSize": 25 }"#)
                .unwrap();
        assert_eq!(settings.base_url, "https://shop.example/api");
        assert_eq!(settings.page_size, 25);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn env_overrides_file_and_cli_overrides_env() {
        let mut settings = Settings::default();
        settings
            .apply_env(env(&[
                ("STOREFRONT_API_URL", "http://env.test/api"),
                ("STOREFRONT_TOKEN", "env-token"),
                ("STOREFRONT_PAGE_SIZE", "20"),
                ("STOREFRONT_LOG_LEVEL", ""),
            ]))
            .unwrap();
        assert_eq!(settings.base_url, "http://env.test/api");
        assert_eq!(settings.token.as_deref(), Some("env-token"));
        assert_eq!(settings.page_size, 20);
        assert_eq!(settings.log_level, "debug");

        let cli = Cli::parse_from([
            "storefront-admin",
            "--url",
            "http://flag.test/api",
            "--timeout",
            "3",
            "colors",
        ]);
        settings.apply_cli(&cli);
        assert_eq!(settings.base_url, "http://flag.test/api");
        assert_eq!(settings.token.as_deref(), Some("env-token"));
        assert_eq!(settings.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn bad_values_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .apply_env(env(&[("STOREFRONT_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidValue {
                key: "STOREFRONT_TIMEOUT_SECS",
                ..
            }
        ));

        settings.page_size = 0;
        assert!(settings.validate().is_err());

        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
