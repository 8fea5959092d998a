use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::catalog::HttpSourceConfig;
use crate::genre::Genre;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Catalog source (required).
    pub source: HttpSourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
    /// Genre index override. When absent the built-in index is used.
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
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

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Browse view configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowseConfig {
    /// Entries per page of the browse view.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    8
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub source: SanitizedSourceConfig,
    pub server: ServerConfig,
    pub browse: BrowseConfig,
}

/// Sanitized catalog source config
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedSourceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            source: SanitizedSourceConfig {
                base_url: config.source.base_url.clone(),
                timeout_secs: config.source.timeout_secs,
            },
            server: config.server.clone(),
            browse: config.browse.clone(),
        }
    }
}
