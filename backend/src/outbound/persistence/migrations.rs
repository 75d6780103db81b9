//! Embedded schema migrations.
//!
//! Migrations run once at startup, before the pool serves traffic. The
//! migration harness is synchronous, so it runs on a blocking thread over
//! a dedicated connection rather than a pooled one.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// All migrations shipped in the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Could not open the migration connection.
    #[error("failed to connect for migrations: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Execution(String),

    /// The blocking migration task was cancelled or panicked.
    #[error("migration task failed to complete")]
    TaskFailed,
}

/// Apply any pending migrations against the given database.
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn: AsyncConnectionWrapper<AsyncPgConnection> =
            AsyncConnectionWrapper::establish(&url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Execution(err.to_string()))?;
        for version in &applied {
            info!(%version, "applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|_| MigrationError::TaskFailed)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::pg::Pg;
    use diesel::migration::MigrationSource;

    #[test]
    fn the_binary_embeds_the_shipped_migrations() {
        // A missing migrations directory would make embed_migrations! embed
        // nothing; guard the wiring here.
        let migrations =
            MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("readable migrations");
        assert_eq!(migrations.len(), 2);
    }
}
