//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on the roster
//! driving ports and stay testable without a running server.

use std::sync::Arc;

use crate::domain::ports::{UserRosterCommand, UserRosterQuery};
use crate::domain::{UserRosterCommandService, UserRosterQueryService};
use crate::outbound::memory::InMemoryUserRepository;

/// Default cap on uploaded CSV bodies, in bytes.
pub const DEFAULT_UPLOAD_LIMIT: usize = 1024 * 1024;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Write side of the roster.
    pub roster: Arc<dyn UserRosterCommand>,
    /// Read side of the roster.
    pub roster_query: Arc<dyn UserRosterQuery>,
    /// Largest accepted upload body, in bytes.
    pub upload_limit: usize,
}

impl HttpState {
    /// Bundle the roster ports with the default upload limit.
    pub fn new(roster: Arc<dyn UserRosterCommand>, roster_query: Arc<dyn UserRosterQuery>) -> Self {
        Self {
            roster,
            roster_query,
            upload_limit: DEFAULT_UPLOAD_LIMIT,
        }
    }

    /// Wire both roster services to one fresh, empty in-memory store.
    ///
    /// # Examples
    /// ```
    /// use roster::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// assert_eq!(state.upload_limit, roster::inbound::http::state::DEFAULT_UPLOAD_LIMIT);
    /// ```
    pub fn in_memory() -> Self {
        let repo = Arc::new(InMemoryUserRepository::new());
        Self::new(
            Arc::new(UserRosterCommandService::new(Arc::clone(&repo))),
            Arc::new(UserRosterQueryService::new(repo)),
        )
    }

    /// Override the upload size cap.
    #[must_use]
    pub fn with_upload_limit(mut self, upload_limit: usize) -> Self {
        self.upload_limit = upload_limit;
        self
    }
}
