//! Server configuration.
//!
//! Read from `TRIP_*` environment variables at startup; anything unset
//! keeps its default.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::form::ValidationPolicy;

const BIND_ADDR: &str = "TRIP_BIND_ADDR";
const LOCATIONS_PATH: &str = "TRIP_LOCATIONS_PATH";
const STATIC_DIR: &str = "TRIP_STATIC_DIR";
const REJECT_SAME_LOCATION: &str = "TRIP_REJECT_SAME_LOCATION";
const REJECT_PAST_DEPARTURE: &str = "TRIP_REJECT_PAST_DEPARTURE";

/// Error returned when a configuration variable cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Configuration for the trip search server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// JSON file holding the location dataset.
    pub locations_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Optional validation rules.
    pub validation: ValidationPolicy,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR) {
            config.bind_addr = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: BIND_ADDR,
                value,
                reason: "expected host:port",
            })?;
        }
        if let Some(value) = lookup(LOCATIONS_PATH) {
            config.locations_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(STATIC_DIR) {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup(REJECT_SAME_LOCATION) {
            config.validation.reject_same_location = parse_flag(REJECT_SAME_LOCATION, value)?;
        }
        if let Some(value) = lookup(REJECT_PAST_DEPARTURE) {
            config.validation.reject_past_departure = parse_flag(REJECT_PAST_DEPARTURE, value)?;
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            locations_path: PathBuf::from("data/locations.json"),
            static_dir: PathBuf::from("static"),
            validation: ValidationPolicy::default(),
        }
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value,
            reason: "expected true or false",
        }),
    }
}
