use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::split::SplitPolicy;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub split: SplitSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreSettings {
    /// Seed JSON to load instead of the built-in data
    pub data_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default)]
    pub min_score: u8,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_score: 0,
        }
    }
}

impl MatchingSettings {
    /// Resolve a requested limit against the configured default and cap
    pub fn effective_limit(&self, requested: Option<u16>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit) as usize
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Deserialize)]
pub struct SplitSettings {
    #[serde(default = "default_size_share")]
    pub size_share: f64,
    #[serde(default = "default_bathroom_premium")]
    pub bathroom_premium: f64,
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            size_share: default_size_share(),
            bathroom_premium: default_bathroom_premium(),
        }
    }
}

impl From<&SplitSettings> for SplitPolicy {
    fn from(settings: &SplitSettings) -> Self {
        Self {
            size_share: settings.size_share,
            bathroom_premium: settings.bathroom_premium,
        }
    }
}

fn default_size_share() -> f64 { 0.7 }
fn default_bathroom_premium() -> f64 { 0.1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

fn env_source() -> Environment {
    // e.g., UNIMATE__MATCHING__MIN_SCORE -> matching.min_score
    Environment::with_prefix("UNIMATE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with UNIMATE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.store.data_path.is_none());
        assert_eq!(settings.matching.default_limit, 20);
        assert_eq!(settings.matching.max_limit, 100);
        assert_eq!(settings.matching.min_score, 0);
        assert_eq!(settings.split.size_share, 0.7);
        assert_eq!(settings.split.bathroom_premium, 0.1);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "compact");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str("[matching]\nmin_score = 40\n", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.matching.min_score, 40);
        assert_eq!(settings.matching.default_limit, 20);
        assert_eq!(settings.split.size_share, 0.7);
    }

    #[test]
    fn test_effective_limit() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.effective_limit(None), 20);
        assert_eq!(matching.effective_limit(Some(5)), 5);
        assert_eq!(matching.effective_limit(Some(500)), 100);
    }
}
