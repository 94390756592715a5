//! Configuration loading for the Folio site
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or malformed config file never aborts startup. It is logged and
//! treated as empty.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable names
pub const ENV_HOST: &str = "FOLIO_HOST";
pub const ENV_PORT: &str = "FOLIO_PORT";
pub const ENV_CONTENT_DIR: &str = "FOLIO_CONTENT_DIR";
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";

/// Compiled defaults used when nothing else is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5780,
            log_level: "info".to_string(),
        }
    }
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Directory holding `blog/*.md` posts
    pub content_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub content_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub content_dir: Option<PathBuf>,
    pub log_level: String,
}

impl SiteConfig {
    /// `host:port` string for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let defaults = CompiledDefaults::default();
        Self {
            host: defaults.host,
            port: defaults.port,
            content_dir: None,
            log_level: defaults.log_level,
        }
    }
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str::<TomlConfig>(&content)?;
    Ok(config)
}

/// Platform config file location (`<config_dir>/folio/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
}

/// Resolves [`SiteConfig`] from overrides, environment, file and defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    config_path: Option<PathBuf>,
}

impl ConfigResolver {
    /// `config_path` replaces the platform default location when given
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Config file that will be consulted, if any location is known
    pub fn config_file_path(&self) -> Option<PathBuf> {
        self.config_path.clone().or_else(default_config_path)
    }

    /// Load the TOML file, degrading to an empty config on any failure
    pub fn load_file(&self) -> TomlConfig {
        let Some(path) = self.config_file_path() else {
            debug!("No config directory available on this platform");
            return TomlConfig::default();
        };

        if !path.exists() {
            debug!("Config file not found: {}", path.display());
            return TomlConfig::default();
        }

        match load_toml_config(&path) {
            Ok(config) => {
                debug!("Loaded config file: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        }
    }

    /// Resolve every setting by priority
    pub fn resolve(&self, overrides: ConfigOverrides) -> Result<SiteConfig> {
        let file = self.load_file();
        let defaults = CompiledDefaults::default();

        let host = overrides
            .host
            .or_else(|| env_string(ENV_HOST))
            .or(file.host)
            .unwrap_or(defaults.host);

        let port = match overrides.port {
            Some(port) => port,
            None => match env_string(ENV_PORT) {
                Some(raw) => raw.parse::<u16>().map_err(|_| {
                    Error::Config(format!("{} is not a valid port: {}", ENV_PORT, raw))
                })?,
                None => file.port.unwrap_or(defaults.port),
            },
        };

        let content_dir = overrides
            .content_dir
            .or_else(|| env_string(ENV_CONTENT_DIR).map(PathBuf::from))
            .or(file.content_dir);

        let log_level = overrides
            .log_level
            .or_else(|| env_string(ENV_LOG_LEVEL))
            .or(file.log_level)
            .unwrap_or(defaults.log_level);

        Ok(SiteConfig {
            host,
            port,
            content_dir,
            log_level,
        })
    }
}

/// Non-empty environment variable value
fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
