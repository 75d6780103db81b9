//! Response envelope shared by every endpoint.
//!
//! Failures always carry `content: null` and at least one error entry;
//! the list endpoint is the only success that uses the envelope (mutation
//! successes have empty bodies).

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;

/// One error entry in the envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiError {
    /// Stable failure name, e.g. `DuplicateName`.
    #[schema(example = "DuplicateName")]
    pub name: String,
    /// Human-readable description.
    #[schema(example = "User 'Fred' is taken.")]
    pub description: String,
}

impl ApiError {
    /// Build an entry from a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

impl From<&Error> for ApiError {
    fn from(error: &Error) -> Self {
        Self::new(error.code().as_str(), error.message())
    }
}

/// Wrapper around every JSON response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// The payload, or `null` on failure.
    pub content: Option<T>,
    /// Failure entries; empty on success.
    pub errors: Vec<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around a payload.
    pub fn success(content: T) -> Self {
        Self {
            content: Some(content),
            errors: Vec::new(),
        }
    }

    /// Failed envelope with a single error entry.
    pub fn failure(error: ApiError) -> Self {
        Self {
            content: None,
            errors: vec![error],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_content_and_empty_errors() {
        let value =
            serde_json::to_value(ApiResponse::success("payload")).expect("serialize");
        assert_eq!(value["content"], "payload");
        assert_eq!(value["errors"], serde_json::json!([]));
    }

    #[test]
    fn failure_serializes_null_content_and_the_entry() {
        let envelope =
            ApiResponse::<()>::failure(ApiError::from(&Error::duplicate_name("Fred")));
        let value = serde_json::to_value(envelope).expect("serialize");
        assert!(value["content"].is_null());
        assert_eq!(value["errors"][0]["name"], "DuplicateName");
        assert_eq!(value["errors"][0]["description"], "User 'Fred' is taken.");
    }
}
