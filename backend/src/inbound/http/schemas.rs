//! OpenAPI-only schema wrappers.
//!
//! These types are never serialized; they give the generated document a
//! concrete shape for bodies whose runtime type is generic.

use serde_json::Value;
use utoipa::ToSchema;

use crate::inbound::http::envelope::ApiError;

/// Envelope shape returned on failure: `content` is always null.
#[derive(ToSchema)]
pub struct ErrorResponse {
    /// Always null on failure.
    #[schema(value_type = Option<Object>)]
    pub content: Option<Value>,
    /// The failure entries.
    pub errors: Vec<ApiError>,
}
