//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_ADMIN_*` environment variables, or a
//! configuration file, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the listener and the initial user roster.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_ADMIN")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Seed the example roster at startup.
    #[ortho_config(default = true)]
    pub seed_users: bool,
}

impl AppSettings {
    /// Return the configured bind address, falling back to the default.
    ///
    /// # Errors
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .trim()
            .parse()
    }
}
