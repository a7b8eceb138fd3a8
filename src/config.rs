use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Place directory (external collaborator) settings
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_directory_url")]
    pub base_url: String,
    #[serde(default = "default_directory_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            base_url: default_directory_url(),
            timeout_secs: default_directory_timeout(),
            search_limit: default_search_limit(),
        }
    }
}

fn default_directory_url() -> String { "https://nominatim.openstreetmap.org".to_string() }
fn default_directory_timeout() -> u64 { 30 }
fn default_search_limit() -> usize { 20 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// Freshness window for directory lookups (30 minutes).
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_entries(),
        }
    }
}

fn default_cache_ttl() -> u64 { 1800 }
fn default_cache_entries() -> u64 { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_amenities_weight")]
    pub amenities: f64,
    #[serde(default = "default_lifestyle_weight")]
    pub lifestyle: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_commute_weight")]
    pub commute: f64,
    #[serde(default = "default_demographics_weight")]
    pub demographics: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            amenities: default_amenities_weight(),
            lifestyle: default_lifestyle_weight(),
            budget: default_budget_weight(),
            commute: default_commute_weight(),
            demographics: default_demographics_weight(),
        }
    }
}

fn default_amenities_weight() -> f64 { 0.30 }
fn default_lifestyle_weight() -> f64 { 0.25 }
fn default_budget_weight() -> f64 { 0.20 }
fn default_commute_weight() -> f64 { 0.15 }
fn default_demographics_weight() -> f64 { 0.10 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BASERA)
    ///    e.g., BASERA__SERVER__PORT -> server.port
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("BASERA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("BASERA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
