//! Bootstrap configuration loading and resolution
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default
//!
//! Tiers 1 and 2 both arrive through clap (`#[arg(env = ...)]`) and are handed
//! in as [`Overrides`]. A missing or unreadable default TOML file never stops
//! startup; an explicitly requested one does.

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Compiled default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Compiled default HTTP port
pub const DEFAULT_PORT: u16 = 8081;

/// Compiled default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Bootstrap configuration read from a TOML file
///
/// All fields are optional so that a partial file only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Address to bind the HTTP server to
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP server port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge overrides, TOML values and compiled defaults
    pub fn resolve(overrides: Overrides, toml: Option<TomlConfig>) -> Self {
        let toml = toml.unwrap_or_default();

        Self {
            host: overrides
                .host
                .or(toml.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(toml.port).unwrap_or(DEFAULT_PORT),
            log_level: overrides
                .log_level
                .or(toml.logging.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// `host:port` string suitable for binding a listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::resolve(Overrides::default(), None)
    }
}

/// Where the TOML tier came from
///
/// Config is loaded before logging is initialized, so the outcome is returned
/// to the caller to log once a subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Values were read from this file
    File(PathBuf),
    /// No file was used; the reason is human readable
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "config file {}", path.display()),
            ConfigSource::Defaults(reason) => write!(f, "built-in defaults ({})", reason),
        }
    }
}

/// Default config file location for a module
///
/// `<config_dir>/cinerec/<module_name>.toml`, e.g. `~/.config/cinerec/cinerec-rs.toml`
pub fn default_config_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cinerec").join(format!("{}.toml", module_name)))
}

/// Load the TOML tier
///
/// With an explicit path, read and parse errors are returned. Without one, the
/// default location is tried and any problem degrades to defaults.
pub fn load_toml_config(
    explicit: Option<&Path>,
    module_name: &str,
) -> Result<(Option<TomlConfig>, ConfigSource)> {
    if let Some(path) = explicit {
        let config = read_toml_config(path)?;
        return Ok((Some(config), ConfigSource::File(path.to_path_buf())));
    }

    let Some(path) = default_config_path(module_name) else {
        return Ok((
            None,
            ConfigSource::Defaults("could not determine config directory".to_string()),
        ));
    };

    if !path.exists() {
        return Ok((
            None,
            ConfigSource::Defaults(format!("no file at {}", path.display())),
        ));
    }

    match read_toml_config(&path) {
        Ok(config) => Ok((Some(config), ConfigSource::File(path))),
        Err(e) => Ok((None, ConfigSource::Defaults(e.to_string()))),
    }
}

/// Read and parse one TOML config file
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;

    parse_toml_config(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Parse TOML config text
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}
