//! User management API handlers
//!
//! Thin wrappers that delegate to `UserService`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateUserRequest, UpdatePasswordRequest, UserDto};
use crate::application::identity::UserService;
use crate::domain::UserRole;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;
use crate::shared::errors::DomainError;

/// User handler state
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 409, description = "Username already registered"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .user_service
        .register(&request.username, &request.password, UserRole::Client)
        .await
    {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(UserDto::from(user))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    if !auth.can_access_user(id) {
        return Err(domain_error_response(DomainError::Forbidden(
            "access restricted to the account owner".into(),
        )));
    }

    match state.user_service.find_by_id(id).await {
        Ok(user) => Ok(Json(ApiResponse::success(UserDto::from(user)))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users; empty list when none exist", body = ApiResponse<Vec<UserDto>>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<UserDto>>>, (StatusCode, Json<ApiResponse<()>>)> {
    if !auth.is_admin() {
        return Err(domain_error_response(DomainError::Forbidden(
            "admin access required".into(),
        )));
    }

    match state.user_service.find_all().await {
        Ok(users) => {
            let items: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 204, description = "Password updated"),
        (status = 400, description = "Password mismatch or wrong current password"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_password(
    State(state): State<UserHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    if !auth.can_access_user(id) {
        return Err(domain_error_response(DomainError::Forbidden(
            "access restricted to the account owner".into(),
        )));
    }

    match state
        .user_service
        .update_password(
            id,
            &request.current_password,
            &request.new_password,
            &request.confirm_password,
        )
        .await
    {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(domain_error_response(e)),
    }
}
