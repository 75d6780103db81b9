//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting handlers turn
//! failures into enveloped JSON responses with consistent status codes.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::{ApiError, ApiResponse};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidName
        | ErrorCode::DuplicateName
        | ErrorCode::UnknownName
        | ErrorCode::InvalidArgument
        | ErrorCode::MissingParameter => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Strip internal details before they reach a client.
fn redact_if_internal(error: &Error) -> ApiError {
    if matches!(error.code(), ErrorCode::Internal) {
        ApiError::new(error.code().as_str(), "Internal server error")
    } else {
        ApiError::from(error)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ApiResponse::<()>::failure(redact_if_internal(self)))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak framework details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Self::internal("Internal server error")
    }
}

/// Default handler for unmatched routes, mirroring the enveloped
/// `PathNotFound` entry the rest of the API produces on failure.
pub async fn path_not_found(request: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(ApiError::new(
        "PathNotFound",
        format!("{} path not found.", request.path()),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("body JSON")
    }

    #[rstest]
    #[case(Error::invalid_name("User name cannot be empty."), StatusCode::BAD_REQUEST)]
    #[case(Error::duplicate_name("Fred"), StatusCode::BAD_REQUEST)]
    #[case(Error::unknown_name("Fred"), StatusCode::BAD_REQUEST)]
    #[case(Error::invalid_argument("Page must be greater than 0"), StatusCode::BAD_REQUEST)]
    #[case(Error::missing_parameter("name"), StatusCode::BAD_REQUEST)]
    #[case(Error::service_unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_the_taxonomy(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn error_response_uses_the_envelope() {
        let body = body_of(Error::duplicate_name("Fred").error_response()).await;
        assert!(body["content"].is_null());
        assert_eq!(body["errors"][0]["name"], "DuplicateName");
        assert_eq!(body["errors"][0]["description"], "User 'Fred' is taken.");
    }

    #[actix_web::test]
    async fn internal_descriptions_are_redacted() {
        let body = body_of(Error::internal("connection string leaked").error_response()).await;
        assert_eq!(body["errors"][0]["name"], "GenericServerError");
        assert_eq!(body["errors"][0]["description"], "Internal server error");
    }

    #[actix_web::test]
    async fn unavailable_descriptions_are_passed_through() {
        let body = body_of(Error::service_unavailable("pool exhausted").error_response()).await;
        assert_eq!(body["errors"][0]["name"], "ServiceUnavailable");
        assert_eq!(body["errors"][0]["description"], "pool exhausted");
    }
}
