//! Parking session API handlers — check-in, check-out and history

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};

use super::dto::{CheckInRequest, ParkingSessionDto};
use crate::application::parking::{CheckIn, ParkingService};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};

/// Parking handler state
#[derive(Clone)]
pub struct ParkingHandlerState {
    pub parking_service: Arc<ParkingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/parkings/check-in",
    tag = "Parkings",
    security(("bearer_auth" = [])),
    request_body = CheckInRequest,
    responses(
        (status = 201, description = "Vehicle checked in", body = ApiResponse<ParkingSessionDto>,
            headers(("Location" = String, description = "URL of the created session"))),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Client not found or no free spot"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn check_in(
    State(state): State<ParkingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    let data = CheckIn {
        plate: request.plate,
        brand: request.brand,
        model: request.model,
        color: request.color,
        client_cpf: request.client_cpf,
    };

    match state.parking_service.check_in(data).await {
        Ok(session) => {
            let location = format!("/api/v1/parkings/{}", session.receipt);
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ApiResponse::success(ParkingSessionDto::from(session))),
            ))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/parkings/check-out/{receipt}",
    tag = "Parkings",
    security(("bearer_auth" = [])),
    params(("receipt" = String, Path, description = "Receipt issued at check-in")),
    responses(
        (status = 200, description = "Vehicle checked out", body = ApiResponse<ParkingSessionDto>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "No open session for this receipt")
    )
)]
pub async fn check_out(
    State(state): State<ParkingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(receipt): Path<String>,
) -> Result<Json<ApiResponse<ParkingSessionDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state.parking_service.check_out(&receipt).await {
        Ok(session) => Ok(Json(ApiResponse::success(ParkingSessionDto::from(session)))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parkings/{receipt}",
    tag = "Parkings",
    security(("bearer_auth" = [])),
    params(("receipt" = String, Path, description = "Receipt issued at check-in")),
    responses(
        (status = 200, description = "Session details", body = ApiResponse<ParkingSessionDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_by_receipt(
    State(state): State<ParkingHandlerState>,
    Path(receipt): Path<String>,
) -> Result<Json<ApiResponse<ParkingSessionDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.parking_service.find_by_receipt(&receipt).await {
        Ok(session) => Ok(Json(ApiResponse::success(ParkingSessionDto::from(session)))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parkings/cpf/{cpf}",
    tag = "Parkings",
    security(("bearer_auth" = [])),
    params(
        ("cpf" = String, Path, description = "Client CPF"),
        PaginationParams
    ),
    responses(
        (status = 200, description = "Sessions for the client", body = PaginatedResponse<ParkingSessionDto>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_by_cpf(
    State(state): State<ParkingHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(cpf): Path<String>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ParkingSessionDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state
        .parking_service
        .find_by_client_cpf(&cpf, params.page, params.limit)
        .await
    {
        Ok(result) => {
            let items: Vec<ParkingSessionDto> = result
                .items
                .into_iter()
                .map(ParkingSessionDto::from)
                .collect();
            Ok(Json(PaginatedResponse::new(
                items,
                result.total,
                result.page,
                result.limit,
            )))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}
