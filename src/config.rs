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
    pub ratings: RatingsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built frontend (`index.html` + WASM bundle)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Local rating storage used by the CLI
#[derive(Debug, Clone, Deserialize)]
pub struct RatingsConfig {
    #[serde(default = "default_ratings_file")]
    pub file: String,
}

fn default_ratings_file() -> String {
    dirs::data_local_dir()
        .map(|p| {
            p.join("coffee-snob")
                .join("ratings.json")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./coffee_snob_ratings.json".to_string())
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            file: default_ratings_file(),
        }
    }
}

impl RatingsConfig {
    /// Ratings file path, with a leading `~` resolved against the home directory
    pub fn path(&self) -> PathBuf {
        expand_home(&self.file)
    }
}

/// Expand `~` and `~/...`; other paths are returned unchanged
fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => &rest[1..],
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => {
            tracing::warn!("No home directory to expand {:?}", path);
            PathBuf::from(path)
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
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

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
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

    /// Load from an explicit path, the default locations, or environment
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_with_env(path)?;
            tracing::info!("Loaded config from {:?}", path);
            return Ok(config);
        }

        let config_paths = [
            dirs::config_dir().map(|p| p.join("coffee-snob").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("COFFEE_SNOB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("COFFEE_SNOB_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid COFFEE_SNOB_PORT: {}", port),
            }
        }
        if let Some(dir) = var("COFFEE_SNOB_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        // Ratings overrides
        if let Some(file) = var("COFFEE_SNOB_RATINGS_FILE") {
            self.ratings.file = file;
        }

        // Logging overrides
        if let Some(level) = var("COFFEE_SNOB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("COFFEE_SNOB_LOG_FORMAT") {
            self.logging.format = format;
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
    r#"# Coffee SNOB Configuration
#
# Environment variables override these settings:
# - COFFEE_SNOB_HOST
# - COFFEE_SNOB_PORT
# - COFFEE_SNOB_STATIC_DIR
# - COFFEE_SNOB_RATINGS_FILE
# - COFFEE_SNOB_LOG_LEVEL
# - COFFEE_SNOB_LOG_FORMAT

[server]
# Address to bind
host = "127.0.0.1"
port = 8080

# Built frontend (output of `trunk build` in ui/)
static_dir = "ui/dist"

# Allowed CORS origins for the read-only shop API (empty = same origin only)
cors_origins = []

[ratings]
# Where the CLI keeps your ratings and notes. Defaults to
# <data dir>/coffee-snob/ratings.json; a leading ~ is expanded.
# file = "~/coffee-snob/ratings.json"

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

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "127.0.0.1:8080");
        assert_eq!(config.server.static_dir, "ui/dist");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.ratings.file.ends_with("ratings.json"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            Config::parse("[server\nport = "),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("COFFEE_SNOB_PORT", "3000"),
            ("COFFEE_SNOB_STATIC_DIR", "/srv/snob"),
            ("COFFEE_SNOB_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "/srv/snob");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_port_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|k| (k == "COFFEE_SNOB_PORT").then(|| "espresso".to_string()));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_generated_config_keeps_default_ratings_file() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let path = config.ratings.path();

        assert_eq!(config.ratings.file, default_ratings_file());
        assert!(!path.starts_with("~"), "{:?}", path);
    }

    #[test]
    fn test_ratings_file_expands_home() {
        let config = Config::parse("[ratings]\nfile = \"~/snob/ratings.json\"\n").unwrap();
        let path = config.ratings.path();
        assert!(!path.starts_with("~"), "{:?}", path);

        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("snob/ratings.json"));
        }

        // Only a leading `~/` is special
        let config = Config::parse("[ratings]\nfile = \"data/~snob.json\"\n").unwrap();
        assert_eq!(config.ratings.path(), PathBuf::from("data/~snob.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
