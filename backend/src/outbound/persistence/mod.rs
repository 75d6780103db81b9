//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: this layer translates between Diesel rows and
//! domain types and maps database failures onto the repository port's
//! error type. Row structs (`models.rs`) and table definitions
//! (`schema.rs`) stay internal. Connections come from an async `bb8`
//! pool via `diesel-async`.

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
