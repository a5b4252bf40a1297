//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Presentation settings shared by every view
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// strftime pattern for dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// strftime pattern for timestamps
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,

    #[serde(default = "default_bootstrap_css_url")]
    pub bootstrap_css_url: String,

    #[serde(default = "default_icons_css_url")]
    pub icons_css_url: String,

    #[serde(default = "default_chart_js_url")]
    pub chart_js_url: String,

    #[serde(default = "default_bootstrap_js_url")]
    pub bootstrap_js_url: String,
}

fn default_app_name() -> String {
    "Loan Portfolio Manager".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_bootstrap_css_url() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css".to_string()
}

fn default_icons_css_url() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css".to_string()
}

fn default_chart_js_url() -> String {
    "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js".to_string()
}

fn default_bootstrap_js_url() -> String {
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            currency_symbol: default_currency_symbol(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            bootstrap_css_url: default_bootstrap_css_url(),
            icons_css_url: default_icons_css_url(),
            chart_js_url: default_chart_js_url(),
            bootstrap_js_url: default_bootstrap_js_url(),
        }
    }
}

/// Where dashboard snapshots come from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// JSON snapshot file; the built-in sample portfolio when unset
    pub snapshot_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("loanboard").join("config.toml")),
            Some(PathBuf::from("/etc/loanboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    ///
    /// Runs before logging is configured, so nothing is logged here; call
    /// [`LoadedConfig::log`] once a subscriber is installed.
    pub fn load_default() -> LoadedConfig {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first readable file among `paths`, falling back to defaults
    pub fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return LoadedConfig {
                        config,
                        source: Some(path.clone()),
                        failures,
                    }
                }
                Err(e) => failures.push(e),
            }
        }

        LoadedConfig {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("LOANBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("LOANBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid LOANBOARD_PORT: {}", port),
            }
        }

        // Data overrides
        if let Some(path) = lookup("LOANBOARD_SNAPSHOT") {
            self.data.snapshot_path = Some(PathBuf::from(path));
        }

        // UI overrides
        if let Some(symbol) = lookup("LOANBOARD_CURRENCY_SYMBOL") {
            self.ui.currency_symbol = symbol;
        }

        // Logging overrides
        if let Some(level) = lookup("LOANBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOANBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of a config search
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means defaults
    pub source: Option<PathBuf>,
    /// Files that exist but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl LoadedConfig {
    /// Config read from an explicitly chosen file
    pub fn from_file(config: Config, path: &Path) -> Self {
        Self {
            config,
            source: Some(path.to_path_buf()),
            failures: Vec::new(),
        }
    }

    /// Report where the config came from and what was skipped
    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipping config file: {}", failure);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Loanboard Configuration
#
# Environment variables override these settings:
# - LOANBOARD_HOST
# - LOANBOARD_PORT
# - LOANBOARD_SNAPSHOT
# - LOANBOARD_CURRENCY_SYMBOL
# - LOANBOARD_LOG_LEVEL
# - LOANBOARD_LOG_FORMAT

[server]
# Address to bind the web server to
host = "127.0.0.1"
port = 5000

[ui]
# Name shown in the top bar and page titles
app_name = "Loan Portfolio Manager"

# Currency prefix for amounts
currency_symbol = "$"

# strftime patterns for dates and timestamps
date_format = "%Y-%m-%d"
datetime_format = "%Y-%m-%d %H:%M"

# Third-party assets
bootstrap_css_url = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css"
icons_css_url = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css"
chart_js_url = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"
bootstrap_js_url = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js"

[data]
# JSON dashboard snapshot; the built-in sample portfolio is used when unset
# snapshot_path = "/var/lib/loanboard/dashboard.json"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:5000");
        assert_eq!(config.ui.currency_symbol, "$");
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
        assert!(config.data.snapshot_path.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = UiConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.ui.app_name, defaults.app_name);
        assert_eq!(config.ui.chart_js_url, defaults.chart_js_url);
        assert_eq!(config.ui.bootstrap_js_url, defaults.bootstrap_js_url);
        assert!(config.data.snapshot_path.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::parse(
            r#"
            [server]
            port = 8080

            [ui]
            currency_symbol = "€"

            [data]
            snapshot_path = "/tmp/dashboard.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ui.currency_symbol, "€");
        assert_eq!(config.ui.app_name, "Loan Portfolio Manager");
        assert_eq!(
            config.data.snapshot_path,
            Some(PathBuf::from("/tmp/dashboard.json"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/loanboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("LOANBOARD_HOST", "0.0.0.0"),
            ("LOANBOARD_PORT", "9000"),
            ("LOANBOARD_SNAPSHOT", "/data/snapshot.json"),
            ("LOANBOARD_CURRENCY_SYMBOL", "£"),
            ("LOANBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "0.0.0.0:9000");
        assert_eq!(
            config.data.snapshot_path,
            Some(PathBuf::from("/data/snapshot.json"))
        );
        assert_eq!(config.ui.currency_symbol, "£");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "LOANBOARD_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_first_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let valid = dir.path().join("valid.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&valid, "[ui]\napp_name = \"Acme Lending\"\n").unwrap();

        let loaded = Config::load_first(&[
            dir.path().join("absent.toml"),
            broken.clone(),
            valid.clone(),
        ]);

        assert_eq!(loaded.source, Some(valid));
        assert_eq!(loaded.config.ui.app_name, "Acme Lending");
        assert_eq!(loaded.failures.len(), 1);
        assert!(matches!(
            &loaded.failures[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("config.toml");
        std::fs::write(&broken, "port = [").unwrap();

        let loaded = Config::load_first(&[broken]);

        assert!(loaded.source.is_none());
        assert_eq!(loaded.failures.len(), 1);
        assert_eq!(loaded.config.ui.app_name, "Loan Portfolio Manager");
    }
}
