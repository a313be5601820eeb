// ABOUTME: Server configuration loaded from the environment
// ABOUTME: Port, bind host, CORS origin, and database settings with defaults

use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use vendorworld_storage::DatabaseOptions;

pub const DEFAULT_PORT: u16 = 4001;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid DB_MAX_CONNECTIONS: {0}")]
    InvalidMaxConnections(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: IpAddr,
    pub cors_origin: String,
    pub database: DatabaseOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let host_str = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let host = host_str
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.clone()))?;

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:5173".to_string());

        let mut database = DatabaseOptions::default();
        if let Some(path) = lookup("DATABASE_PATH").filter(|p| !p.trim().is_empty()) {
            database.path = PathBuf::from(path);
        }
        if let Some(raw) = lookup("DB_MAX_CONNECTIONS") {
            database.max_connections = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidMaxConnections(raw.clone()))?;
        }

        Ok(Config {
            port,
            host,
            cors_origin,
            database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.port, 4001);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.path.ends_with("vendorworld.db"));
    }

    #[test]
    fn test_custom_values() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("HOST", "0.0.0.0"),
            ("CORS_ORIGIN", "https://app.example.com"),
            ("DATABASE_PATH", "/tmp/vw.db"),
            ("DB_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.cors_origin, "https://app.example.com");
        assert_eq!(config.database.path, PathBuf::from("/tmp/vw.db"));
        assert_eq!(config.database.max_connections, 4);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "not-a-number")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(&[("PORT", "0")]),
            Err(ConfigError::PortOutOfRange(0))
        ));
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            config_from(&[("HOST", "localhost:80")]),
            Err(ConfigError::InvalidHost(_))
        ));
        assert!(matches!(
            config_from(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::InvalidMaxConnections(_))
        ));
    }
}
