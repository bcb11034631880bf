//! HTTP server configuration object.

use std::net::SocketAddr;

use roster::inbound::http::state::DEFAULT_UPLOAD_LIMIT;
use roster::settings::{AppSettings, SettingsError};

/// Listener and request limits for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) upload_limit: usize,
}

impl ServerConfig {
    /// Listen on `bind_addr` with the default upload limit.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            upload_limit: DEFAULT_UPLOAD_LIMIT,
        }
    }

    /// Cap CSV uploads at `upload_limit` bytes.
    #[must_use]
    pub fn with_upload_limit(mut self, upload_limit: usize) -> Self {
        self.upload_limit = upload_limit;
        self
    }

    /// Build the configuration from loaded settings.
    ///
    /// # Errors
    /// Propagates [`SettingsError`] for an unusable host or upload limit.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_addr()?).with_upload_limit(settings.upload_limit()?))
    }
}
