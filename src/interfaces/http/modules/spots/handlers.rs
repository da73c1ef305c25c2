//! Spot management API handlers — admin only

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateSpotRequest, SpotDto};
use crate::application::parking::SpotService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};

/// Spot handler state
#[derive(Clone)]
pub struct SpotHandlerState {
    pub spot_service: Arc<SpotService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/spots",
    tag = "Spots",
    security(("bearer_auth" = [])),
    request_body = CreateSpotRequest,
    responses(
        (status = 201, description = "Spot created", body = ApiResponse<SpotDto>),
        (status = 403, description = "Admin only"),
        (status = 409, description = "Code already registered"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_spot(
    State(state): State<SpotHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CreateSpotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SpotDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state.spot_service.insert(&request.code).await {
        Ok(spot) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(SpotDto::from(spot))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/spots/{code}",
    tag = "Spots",
    security(("bearer_auth" = [])),
    params(("code" = String, Path, description = "Spot code")),
    responses(
        (status = 200, description = "Spot details", body = ApiResponse<SpotDto>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_spot(
    State(state): State<SpotHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<SpotDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state.spot_service.find_by_code(&code).await {
        Ok(spot) => Ok(Json(ApiResponse::success(SpotDto::from(spot)))),
        Err(e) => Err(domain_error_response(e)),
    }
}
