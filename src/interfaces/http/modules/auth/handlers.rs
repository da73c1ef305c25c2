//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LoginRequest, LoginResponse, UserInfo};
use crate::application::identity::UserService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Auth handler state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub user_service: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .user_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(auth) => Ok(Json(ApiResponse::success(LoginResponse {
            token: auth.token,
            token_type: auth.token_type,
            expires_in: auth.expires_in,
            user: UserInfo::from(auth.user),
        }))),
        Err(e) => Err(domain_error_response(e)),
    }
}
