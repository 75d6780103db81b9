//! Backend entry-point: wires REST endpoints, persistence, and OpenAPI docs.

use std::env;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use taskmanager::inbound::http::health::HealthState;
use taskmanager::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

mod server;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            run_pending_migrations(&database_url)
                .await
                .map_err(|e| std::io::Error::other(format!("migrations failed: {e}")))?;

            let pool = DbPool::new(PoolConfig::new(&database_url))
                .await
                .map_err(|e| std::io::Error::other(format!("pool construction failed: {e}")))?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; user records will not survive a restart");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
