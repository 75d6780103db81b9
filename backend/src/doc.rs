//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the specification for the REST API: the `/users`
//! endpoints, the health probes, and the envelope schemas. Swagger UI
//! serves the document in debug builds.

use utoipa::OpenApi;

use crate::domain::Page;
use crate::inbound::http::envelope::{ApiError, ApiResponse};
use crate::inbound::http::schemas::ErrorResponse;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Manager API specification",
        description = "OpenApi documentation for Task Manager",
        version = "0.1.0"
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::remove_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::get_users_page,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ApiError,
        ErrorResponse,
        Page<String>,
        ApiResponse<Page<String>>,
    )),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_user_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/users/create", "/users/remove", "/users/update", "/users/get"] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn document_registers_the_error_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("ApiError"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
