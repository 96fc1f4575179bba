//! Configuration management for tallyweb
//!
//! This module handles loading, validation, and management of
//! tallyweb configuration from YAML files.

pub mod error;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use error::{ConfigError, ConfigResult};

// ==================== Configuration Types ====================

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

/// Ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerConfig {
    /// Which ledger variant new sessions start with
    #[serde(default)]
    pub mode: LedgerMode,
}

/// Ledger variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerMode {
    /// One running total per item
    Totals,
    /// Every recorded amount per item, in order
    Log,
}

impl Default for LedgerMode {
    fn default() -> Self {
        LedgerMode::Totals
    }
}

impl std::str::FromStr for LedgerMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "totals" | "total" => Ok(LedgerMode::Totals),
            "log" => Ok(LedgerMode::Log),
            _ => Err(format!("Invalid ledger mode: {}", s)),
        }
    }
}

impl std::fmt::Display for LedgerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerMode::Totals => write!(f, "totals"),
            LedgerMode::Log => write!(f, "log"),
        }
    }
}

/// Browser session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Minutes of inactivity after which a session is discarded
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_minutes: u64,
    /// Most sessions held at once; the least recently seen one is evicted
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_minutes: default_idle_timeout(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_cookie_name() -> String {
    "tallyweb_session".to_string()
}

fn default_idle_timeout() -> u64 {
    120
}

fn default_max_sessions() -> usize {
    10_000
}

/// Currency and number formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Symbol printed before amounts
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Thousands separator
    #[serde(default = "default_thousands_sep")]
    pub thousands_separator: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thousands_separator: default_thousands_sep(),
        }
    }
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_thousands_sep() -> String {
    ",".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Ledger settings
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
    /// Currency settings
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: PathBuf) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => ConfigError::IoError,
        })?;

        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::InvalidYaml { message: e.to_string() })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if self.session.cookie_name.is_empty()
            || !self
                .session
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::InvalidValue {
                field: "session.cookie_name".to_string(),
                reason: "Cookie name must be non-empty and use only letters, digits, '_' or '-'".to_string(),
            });
        }

        if self.session.idle_timeout_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.idle_timeout_minutes".to_string(),
                reason: "Idle timeout must be at least 1 minute".to_string(),
            });
        }

        if self.session.max_sessions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.max_sessions".to_string(),
                reason: "At least one session must be allowed".to_string(),
            });
        }

        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: "Level must be one of trace, debug, info, warn, error, off".to_string(),
            });
        }

        Ok(())
    }

    /// Generate a default configuration file
    pub fn generate_default() -> &'static str {
        include_str!("../templates/default_config.yaml")
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorCode;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.ledger.mode, LedgerMode::Totals);
        assert_eq!(config.session.cookie_name, "tallyweb_session");
        assert_eq!(config.currency.symbol, "$");
    }

    #[test]
    fn test_generated_default_parses() {
        let config = Config::from_yaml(Config::generate_default()).unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.ledger.mode, LedgerMode::Totals);
        assert_eq!(config.session.idle_timeout_minutes, 120);
        assert_eq!(config.session.max_sessions, 10_000);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml("ledger:\n  mode: log\n").unwrap();
        assert_eq!(config.ledger.mode, LedgerMode::Log);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.currency.thousands_separator, ",");
        assert_eq!(config.bind_address(), "127.0.0.1:8501");
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = Config::from_yaml("server:\n  port: 0\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = Config::from_yaml("ledger:\n  mode: ledgerish\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidYaml);
    }

    #[test]
    fn test_bad_cookie_name_rejected() {
        let err = Config::from_yaml("session:\n  cookie_name: \"a b\"\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_zero_idle_timeout_rejected() {
        let err = Config::from_yaml("session:\n  idle_timeout_minutes: 0\n").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::InvalidValue);
    }

    #[test]
    fn test_zero_max_sessions_rejected() {
        let err = Config::from_yaml("session:\n  max_sessions: 0\n").unwrap_err();
        assert!(err.to_string().contains("session.max_sessions"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = Config::from_yaml("logging:\n  level: loud\n").unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(PathBuf::from("/nonexistent/tallyweb.yaml")).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::FileNotFound);
    }

    #[test]
    fn test_ledger_mode_from_str() {
        assert_eq!("log".parse::<LedgerMode>(), Ok(LedgerMode::Log));
        assert_eq!("TOTALS".parse::<LedgerMode>(), Ok(LedgerMode::Totals));
        assert!("other".parse::<LedgerMode>().is_err());
        assert_eq!(LedgerMode::Log.to_string(), "log");
    }
}
