//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::warn;

use taskmanager::Trace;
#[cfg(debug_assertions)]
use taskmanager::doc::ApiDoc;
use taskmanager::domain::ports::{InMemoryUserRepository, UserDirectory};
use taskmanager::domain::{Error, UserDirectoryService};
use taskmanager::inbound::http::error::path_not_found;
use taskmanager::inbound::http::health::{HealthState, live, ready};
use taskmanager::inbound::http::state::HttpState;
use taskmanager::inbound::http::users::{create_user, get_users_page, remove_user, update_user};
use taskmanager::outbound::persistence::DieselUserRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Build the user directory behind the HTTP handlers.
///
/// Uses the database-backed repository when a pool is configured and
/// falls back to the in-memory repository otherwise.
fn build_user_directory(config: &ServerConfig) -> Arc<dyn UserDirectory> {
    match &config.db_pool {
        Some(pool) => Arc::new(UserDirectoryService::new(Arc::new(
            DieselUserRepository::new(pool.clone()),
        ))),
        None => {
            warn!("no database pool configured; user directory is in-memory only");
            Arc::new(UserDirectoryService::new(Arc::new(
                InMemoryUserRepository::default(),
            )))
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    // Query-string parse failures surface in the envelope rather than in
    // actix's plain-text default.
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| Error::invalid_argument(err.to_string()).into());

    let users = web::scope("/users")
        .service(create_user)
        .service(remove_user)
        .service(update_user)
        .service(get_users_page);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(query_config)
        .wrap(Trace)
        .service(users)
        .service(ready)
        .service(live)
        .default_service(web::route().to(path_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let directory = build_user_directory(&config);
    let http_state = web::Data::new(HttpState::new(directory));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
