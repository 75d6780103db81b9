//! User directory domain service.
//!
//! Implements the [`UserDirectory`] driving port on top of a
//! [`UserRepository`] adapter: it interprets affected-row counts, maps
//! persistence failures into the domain taxonomy, and validates
//! pagination arguments before any storage is touched.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserDirectory, UserPersistenceError, UserRepository};
use crate::domain::{Error, Page, PageRequest, User, UserName};

/// Directory service backed by a repository adapter.
#[derive(Clone)]
pub struct UserDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> UserDirectoryService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserDirectoryService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => Error::service_unavailable(message),
            UserPersistenceError::Query { message } => Error::internal(message),
            UserPersistenceError::DuplicateName { name } => Error::duplicate_name(name),
        }
    }

    /// Resolve a zero-row rename into the client-visible failure.
    ///
    /// A zero-row UPDATE cannot trip the unique index, so when the source
    /// name is missing the duplicate case must be ruled out explicitly:
    /// duplicate-name takes precedence over unknown-name when both apply,
    /// matching deferred constraint enforcement at commit time.
    async fn rename_failure(&self, current: &UserName, replacement: &UserName) -> Error {
        match self.repository.exists(replacement).await {
            Ok(true) => Error::duplicate_name(replacement.as_ref()),
            Ok(false) => Error::unknown_name(current.as_ref()),
            Err(err) => Self::map_persistence_error(err),
        }
    }
}

#[async_trait]
impl<R> UserDirectory for UserDirectoryService<R>
where
    R: UserRepository,
{
    async fn add(&self, name: &UserName) -> Result<(), Error> {
        let user = User::with_name(name.clone());
        self.repository
            .insert(&user)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn remove(&self, name: &UserName) -> Result<(), Error> {
        let deleted_rows = self
            .repository
            .delete_by_name(name)
            .await
            .map_err(Self::map_persistence_error)?;

        if deleted_rows == 0 {
            return Err(Error::unknown_name(name.as_ref()));
        }
        Ok(())
    }

    async fn rename(&self, current: &UserName, replacement: &UserName) -> Result<(), Error> {
        let updated_rows = self
            .repository
            .rename(current, replacement)
            .await
            .map_err(Self::map_persistence_error)?;

        if updated_rows == 0 {
            return Err(self.rename_failure(current, replacement).await);
        }
        Ok(())
    }

    async fn list_page(&self, page: i64, size: i64) -> Result<Page<String>, Error> {
        let request =
            PageRequest::new(page, size).map_err(|err| Error::invalid_argument(err.to_string()))?;

        let snapshot = self
            .repository
            .page_of_names(request.offset(), request.limit())
            .await
            .map_err(Self::map_persistence_error)?;

        Ok(Page::from_parts(
            snapshot.names,
            snapshot.total_count,
            request.limit(),
        ))
    }
}
