//! Configuration for the PIM gateway.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Caller authorization configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Downstream uidmap configuration
    #[serde(default)]
    pub uidmap: UidmapConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Identity string reported in the `Server` header and `/egg` banner
    #[serde(default = "default_server_name")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Comma-separated addresses and CIDR ranges allowed to call the
    /// gateway. An empty string authorizes every caller.
    #[serde(default = "default_allowed_remote_ips")]
    pub allowed_remote_ips: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UidmapConfig {
    /// Uidmap base address
    #[serde(default = "default_uidmap_addr")]
    pub addr: String,

    /// Timeout for submitting a batch to uidmap
    #[serde(with = "humantime_serde", default = "default_uidmap_timeout")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            name: default_server_name(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allowed_remote_ips: default_allowed_remote_ips(),
        }
    }
}

impl Default for UidmapConfig {
    fn default() -> Self {
        Self {
            addr: default_uidmap_addr(),
            timeout: default_uidmap_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_server_name() -> String {
    "PIM Gateway".into()
}

fn default_allowed_remote_ips() -> String {
    "127.0.0.1/24".into()
}

fn default_uidmap_addr() -> String {
    "http://localhost:8022".into()
}

fn default_uidmap_timeout() -> Duration {
    Duration::from_secs(5 * 60)
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
