//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data`, so they depend
//! only on the directory port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// The directory use-case port serving the `/users` endpoints.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state around a directory implementation.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
