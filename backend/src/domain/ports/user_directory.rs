//! Driving port for the user directory.
//!
//! Inbound adapters (HTTP handlers) call this port so they depend only on
//! directory semantics, never on persistence concerns. Production backs it
//! with [`crate::domain::UserDirectoryService`] over a repository adapter.

use async_trait::async_trait;

use crate::domain::{Error, Page, UserName};

/// Use-case port covering the four directory operations.
///
/// Name arguments are already validated ([`UserName`] cannot be blank) and,
/// for `rename`, the caller has rejected `current == replacement` before
/// reaching this port.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Create a user with a fresh identifier and the given name.
    async fn add(&self, name: &UserName) -> Result<(), Error>;

    /// Delete the user with the given name.
    async fn remove(&self, name: &UserName) -> Result<(), Error>;

    /// Give the user named `current` the name `replacement`.
    async fn rename(&self, current: &UserName, replacement: &UserName) -> Result<(), Error>;

    /// Read one 1-based page of user names with collection totals.
    async fn list_page(&self, page: i64, size: i64) -> Result<Page<String>, Error>;
}
