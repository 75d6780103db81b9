//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Mutations are single statements, so the `UNIQUE` index on `users.name`
//! is the conflict detection demanded by the unique-name invariant:
//! a violating insert or update fails atomically inside the database.
//! Page reads run count and contents in one transaction so both describe
//! the same instant.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{NamePage, UserPersistenceError, UserRepository};
use crate::domain::{User, UserName};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the port's connection error.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Map Diesel errors from a write that may trip the unique index.
///
/// `conflicting_name` is the name the failed write tried to claim.
fn map_write_error(error: diesel::result::Error, conflicting_name: &str) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate_name(conflicting_name)
        }
        other => map_diesel_error(other),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: user.id(),
            name: user.name().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_write_error(err, user.name().as_ref()))
    }

    async fn delete_by_name(&self, name: &UserName) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(users::table.filter(users::name.eq(name.as_ref())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn rename(
        &self,
        current: &UserName,
        replacement: &UserName,
    ) -> Result<usize, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(users::table.filter(users::name.eq(current.as_ref())))
            .set((
                users::name.eq(replacement.as_ref()),
                users::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map_err(|err| map_write_error(err, replacement.as_ref()))
    }

    async fn exists(&self, name: &UserName) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::name.eq(name.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.is_some())
    }

    async fn page_of_names(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<NamePage, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            async move {
                let total_count: i64 = users::table.count().get_result(conn).await?;
                let names: Vec<String> = users::table
                    .select(users::name)
                    .order((users::created_at.asc(), users::id.asc()))
                    .offset(offset)
                    .limit(limit)
                    .load(conn)
                    .await?;
                Ok(NamePage { names, total_count })
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
