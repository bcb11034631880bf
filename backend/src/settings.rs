//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags (`--host`, `--port`, `--upload-limit`) and
//! `ROSTER_`-prefixed environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::inbound::http::state::DEFAULT_UPLOAD_LIMIT;

/// Address bound when no host is configured.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Port bound when no port is configured. Mirrors the `port` default below.
pub const DEFAULT_PORT: u16 = 5000;

/// Settings that cannot be turned into a listener configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// `host` does not parse as an IP address.
    #[error("invalid host '{host}': expected an IP address")]
    InvalidHost {
        /// Rejected host value.
        host: String,
    },
    /// `upload_limit` was explicitly set to zero.
    #[error("upload limit must be greater than zero")]
    ZeroUploadLimit,
}

/// Process configuration for the roster server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct AppSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 5000)]
    pub port: u16,
    /// Largest accepted CSV upload in bytes.
    pub upload_limit: Option<usize>,
}

impl AppSettings {
    /// Address the server listens on, defaulting to `0.0.0.0:5000`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_HOST,
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidHost {
                host: raw.to_owned(),
            })?,
        };
        Ok(SocketAddr::new(host, self.port))
    }

    /// Upload size limit, defaulting to 1 MiB.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroUploadLimit`] for an explicit zero.
    pub fn upload_limit(&self) -> Result<usize, SettingsError> {
        match self.upload_limit {
            Some(0) => Err(SettingsError::ZeroUploadLimit),
            Some(limit) => Ok(limit),
            None => Ok(DEFAULT_UPLOAD_LIMIT),
        }
    }
}
