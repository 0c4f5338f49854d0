//! HTTP server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

/// Listen address for the prediction endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    5000
}

impl ServerConfig {
    /// Resolve the configured host and port into a socket address.
    ///
    /// # Errors
    ///
    /// Returns a config error if the host is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = self.host.parse::<IpAddr>().map_err(|e| {
            Error::from(ConfigError::InvalidValue {
                field: "server.host",
                reason: format!("'{}': {e}", self.host),
            })
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
