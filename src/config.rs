//! Configuration management for the contact book server.
//!
//! All settings come from environment variables with sensible defaults, so the
//! server starts without any configuration. A `.env` file is honored when
//! present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the contact book server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Path of the JSON file holding the contact list
    pub data_path: String,

    /// Log level (default: "info")
    pub log_level: String,
}

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DATA_PATH: &str = "data/contacts.json";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_BIND_ADDR`: listen address (default: 127.0.0.1:3000)
    /// - `CONTACTS_DATA_PATH`: contact file path (default: data/contacts.json)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let raw_addr =
            env::var("CONTACTS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr =
            raw_addr
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "CONTACTS_BIND_ADDR".to_string(),
                    reason: format!("Must be a socket address, got: {}", raw_addr),
                })?;

        let data_path =
            env::var("CONTACTS_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
        if data_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_DATA_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            bind_addr,
            data_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.parse().expect("default address parses"),
            data_path: DEFAULT_DATA_PATH.to_string(),
            log_level: "info".to_string(),
        }
    }
}
