//! Users API handlers.
//!
//! ```text
//! POST   /users/create?name=Fred
//! DELETE /users/remove?name=Fred
//! PATCH  /users/update?originalName=Fred&newName=Bob
//! GET    /users/get?page=1&size=10
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, Page};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ApiResponse;
use crate::inbound::http::schemas::ErrorResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{reject_same_name, require_name};

/// Default page index when the client omits `page`.
const DEFAULT_PAGE: i64 = 1;
/// Default page size when the client omits `size`.
const DEFAULT_SIZE: i64 = 10;

/// Query parameters for `POST /users/create`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateUserParams {
    /// The name of the user to create.
    #[param(example = "Fred")]
    pub name: Option<String>,
}

/// Query parameters for `DELETE /users/remove`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RemoveUserParams {
    /// The name of the user to remove.
    #[param(example = "Fred")]
    pub name: Option<String>,
}

/// Query parameters for `PATCH /users/update`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UpdateUserParams {
    /// The current name of the user to rename.
    #[param(example = "Fred")]
    pub original_name: Option<String>,
    /// The name the user will carry afterwards.
    #[param(example = "Bob")]
    pub new_name: Option<String>,
}

/// Query parameters for `GET /users/get`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// 1-based page index; defaults to 1.
    #[param(example = 1)]
    pub page: Option<i64>,
    /// Page size; defaults to 10.
    #[param(example = 10)]
    pub size: Option<i64>,
}

/// Create a user with the given name.
#[utoipa::path(
    post,
    path = "/users/create",
    params(CreateUserParams),
    responses(
        (status = 201, description = "User created successfully."),
        (status = 400, description = "User name empty or taken.", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/create")]
pub async fn create_user(
    state: web::Data<HttpState>,
    params: web::Query<CreateUserParams>,
) -> ApiResult<HttpResponse> {
    let name = require_name(params.name.as_deref(), "name")?;
    state.users.add(&name).await?;
    Ok(HttpResponse::Created().finish())
}

/// Remove the user with the given name.
#[utoipa::path(
    delete,
    path = "/users/remove",
    params(RemoveUserParams),
    responses(
        (status = 200, description = "User removed successfully."),
        (status = 400, description = "User name empty or unknown.", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "removeUser"
)]
#[delete("/remove")]
pub async fn remove_user(
    state: web::Data<HttpState>,
    params: web::Query<RemoveUserParams>,
) -> ApiResult<HttpResponse> {
    let name = require_name(params.name.as_deref(), "name")?;
    state.users.remove(&name).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Rename a user.
///
/// The same-name check runs before the blank checks, so equal inputs
/// always report the same-name failure.
#[utoipa::path(
    patch,
    path = "/users/update",
    params(UpdateUserParams),
    responses(
        (status = 200, description = "User renamed successfully."),
        (
            status = 400,
            description = "Names equal or empty, user unknown, or new name taken.",
            body = ErrorResponse
        )
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/update")]
pub async fn update_user(
    state: web::Data<HttpState>,
    params: web::Query<UpdateUserParams>,
) -> ApiResult<HttpResponse> {
    let original = params
        .original_name
        .as_deref()
        .ok_or_else(|| Error::missing_parameter("originalName"))?;
    let replacement = params
        .new_name
        .as_deref()
        .ok_or_else(|| Error::missing_parameter("newName"))?;

    reject_same_name(original, replacement)?;
    let current = require_name(Some(original), "originalName")?;
    let replacement = require_name(Some(replacement), "newName")?;

    state.users.rename(&current, &replacement).await?;
    Ok(HttpResponse::Ok().finish())
}

/// Retrieve one page of user names.
#[utoipa::path(
    get,
    path = "/users/get",
    params(ListUsersParams),
    responses(
        (
            status = 200,
            description = "Page of users retrieved successfully.",
            body = ApiResponse<Page<String>>
        ),
        (status = 400, description = "Invalid page or size.", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUsersPage"
)]
#[get("/get")]
pub async fn get_users_page(
    state: web::Data<HttpState>,
    params: web::Query<ListUsersParams>,
) -> ApiResult<web::Json<ApiResponse<Page<String>>>> {
    let page = params.page.unwrap_or(DEFAULT_PAGE);
    let size = params.size.unwrap_or(DEFAULT_SIZE);
    let users = state.users.list_page(page, size).await?;
    Ok(web::Json(ApiResponse::success(users)))
}
