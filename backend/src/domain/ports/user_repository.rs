//! Driven port for user persistence adapters and their errors.
//!
//! The port keeps the original storage semantics visible to the service
//! layer: mutations report affected-row counts, and uniqueness conflicts
//! surface as a dedicated error raised by the adapter's conflict
//! detection, atomically with the offending write.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{User, UserName};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },

    /// A write collided with the unique-name constraint.
    #[error("user name '{name}' is already taken")]
    DuplicateName { name: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-name error for the given name.
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}

/// One consistent snapshot of a page of names plus the live-record count.
///
/// Adapters must read both fields at the same logical instant (a single
/// transaction, or a single critical section).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePage {
    /// The names on the requested page, in insertion order.
    pub names: Vec<String>,
    /// Count of all live records when the page was read.
    pub total_count: i64,
}

/// Port for user storage.
///
/// ## Concurrency contract
///
/// Each method is atomic with respect to the unique-name invariant:
/// concurrent inserts or renames targeting one name must not both
/// succeed, and concurrent deletes of one row must not both report an
/// affected row. Adapters satisfy this with a unique index plus
/// conflict detection, or by serializing the write path.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user record.
    ///
    /// Fails with [`UserPersistenceError::DuplicateName`] when a live
    /// record already holds the same name.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Delete the record with the given name, returning the affected-row
    /// count (0 when no such record exists).
    async fn delete_by_name(&self, name: &UserName) -> Result<usize, UserPersistenceError>;

    /// Rename `current` to `replacement` in one atomic write, returning
    /// the affected-row count (0 when `current` does not exist).
    ///
    /// Fails with [`UserPersistenceError::DuplicateName`] when the write
    /// would give `replacement` to a second live record.
    async fn rename(
        &self,
        current: &UserName,
        replacement: &UserName,
    ) -> Result<usize, UserPersistenceError>;

    /// Whether a live record currently holds the given name.
    async fn exists(&self, name: &UserName) -> Result<bool, UserPersistenceError>;

    /// Read one page of names and the total live-record count.
    async fn page_of_names(&self, offset: i64, limit: i64)
    -> Result<NamePage, UserPersistenceError>;
}

/// Mutex-serialized in-memory adapter.
///
/// Serves as the development fallback when no database is configured and
/// as the deterministic implementation for tests. The single mutex is the
/// serializing write path that upholds the concurrency contract; names
/// are kept in insertion order, matching the database adapter's ordering.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.lock().map_err(poisoned)?;
        if users.iter().any(|existing| existing.name() == user.name()) {
            return Err(UserPersistenceError::duplicate_name(user.name().as_ref()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn delete_by_name(&self, name: &UserName) -> Result<usize, UserPersistenceError> {
        let mut users = self.users.lock().map_err(poisoned)?;
        let before = users.len();
        users.retain(|user| user.name() != name);
        Ok(before - users.len())
    }

    async fn rename(
        &self,
        current: &UserName,
        replacement: &UserName,
    ) -> Result<usize, UserPersistenceError> {
        let mut users = self.users.lock().map_err(poisoned)?;
        let Some(position) = users.iter().position(|user| user.name() == current) else {
            // No row is touched, so no constraint can fire; mirrors a
            // zero-row UPDATE against a unique index.
            return Ok(0);
        };
        if users
            .iter()
            .enumerate()
            .any(|(index, user)| index != position && user.name() == replacement)
        {
            return Err(UserPersistenceError::duplicate_name(replacement.as_ref()));
        }
        if let Some(user) = users.get_mut(position) {
            // The identifier is immutable; only the name changes.
            *user = User::restore(user.id(), replacement.clone());
        }
        Ok(1)
    }

    async fn exists(&self, name: &UserName) -> Result<bool, UserPersistenceError> {
        let users = self.users.lock().map_err(poisoned)?;
        Ok(users.iter().any(|user| user.name() == name))
    }

    async fn page_of_names(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<NamePage, UserPersistenceError> {
        let users = self.users.lock().map_err(poisoned)?;
        let total_count = users.len() as i64;
        let names = users
            .iter()
            .map(|user| user.name().as_ref().to_owned())
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect();
        Ok(NamePage { names, total_count })
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}
