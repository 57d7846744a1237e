use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute site origin used for canonical URLs, sitemap and RSS links.
    pub site_base_url: String,

    // Database
    pub database_path: PathBuf,

    // Web Server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            site_base_url: normalize_base_url(&env_or_default(
                "SITE_BASE_URL",
                "https://stox.bg",
            )),
            database_path: PathBuf::from(env_or_default("DATABASE_PATH", "./data/content.sqlite")),
            web_host: env_or_default("WEB_HOST", "0.0.0.0"),
            web_port: parse_env_u16("WEB_PORT", 8080)?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "SITE_BASE_URL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        match url::Url::parse(&self.site_base_url) {
            Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
            Ok(_) | Err(_) => Err(ConfigError::InvalidValue {
                name: "SITE_BASE_URL".to_string(),
                message: "must be an absolute http(s) origin".to_string(),
            }),
        }
    }
}

/// Canonical URLs are `base + path`, so the base must not end with a slash.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://stox.bg/"), "https://stox.bg");
        assert_eq!(normalize_base_url("https://stox.bg"), "https://stox.bg");
    }

    #[test]
    fn test_validate_rejects_relative_base() {
        let config = Config {
            site_base_url: "stox.bg".to_string(),
            database_path: PathBuf::from("./data/content.sqlite"),
            web_host: "127.0.0.1".to_string(),
            web_port: 8080,
        };
        assert!(config.validate().is_err());
    }
}
