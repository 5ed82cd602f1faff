//! Registration and login handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedBody;
use crate::api::AppState;
use crate::config::{MAX_FIELD_LENGTH, MSG_LOGIN_SUCCESSFUL, MSG_STUDENT_ADDED};
use crate::errors::AppResult;
use crate::types::{CreatedResponse, MessageResponse};

/// Student registration request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(
        custom(function = "crate::utils::validation::not_blank"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(
        email(message = "Invalid email format"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        email(message = "Invalid email format"),
        length(max = MAX_FIELD_LENGTH, message = "Must be at most 255 characters")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// `/add-userdb` and `/register` are the same operation under two historical paths
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/add-userdb", post(add_user))
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Insert a student record
#[utoipa::path(
    post,
    path = "/add-userdb",
    tag = "Students",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Student added", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered"),
        (status = 502, description = "Store unavailable")
    )
)]
pub async fn add_user(
    state: State<AppState>,
    payload: ValidatedBody<RegisterRequest>,
) -> AppResult<Json<CreatedResponse>> {
    register(state, payload).await
}

/// Register a student
#[utoipa::path(
    post,
    path = "/register",
    tag = "Students",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Student added", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered"),
        (status = 502, description = "Store unavailable")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<RegisterRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let user = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(CreatedResponse::new(MSG_STUDENT_ADDED, user.id)))
}

/// Check a student's credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "Students",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong email or password"),
        (status = 502, description = "Store unavailable")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedBody(payload): ValidatedBody<LoginRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(MessageResponse::new(MSG_LOGIN_SUCCESSFUL)))
}
