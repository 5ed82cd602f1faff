//! Student record handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{IdPath, ValidatedBody};
use crate::api::AppState;
use crate::config::{MAX_FIELD_LENGTH, MSG_DELETED, MSG_UPDATED};
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Student update request; both fields are replaced
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "Jane Smith")]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "jane.smith@example.com")]
    pub email: String,
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:id", get(get_user))
        .route("/update/:id", put(update_user).patch(update_user))
        .route("/delete/:id", delete(delete_user))
}

/// Get a student by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student record", body = UserResponse),
        (status = 404, description = "No such student")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Replace a student's name and email
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No such student"),
        (status = 409, description = "Email belongs to another student")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedBody(payload): ValidatedBody<UpdateUserRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .update_user(id, payload.name, payload.email)
        .await?;

    Ok(Json(MessageResponse::new(MSG_UPDATED)))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "No such student")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::new(MSG_DELETED)))
}
