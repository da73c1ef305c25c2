//! Client management API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{ClientDto, CreateClientRequest};
use crate::application::parking::ClientService;
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};
use crate::interfaces::http::middleware::{require_admin, AuthenticatedUser};

/// Client handler state
#[derive(Clone)]
pub struct ClientHandlerState {
    pub client_service: Arc<ClientService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = "Clients",
    security(("bearer_auth" = [])),
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client created", body = ApiResponse<ClientDto>),
        (status = 409, description = "CPF already registered"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_client(
    State(state): State<ClientHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ClientDto>>), (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .client_service
        .insert(&request.name, &request.cpf)
        .await
    {
        Ok(client) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(ClientDto::from(client))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientDto>),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client(
    State(state): State<ClientHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ClientDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state.client_service.find_by_id(id).await {
        Ok(client) => Ok(Json(ApiResponse::success(ClientDto::from(client)))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/clients",
    tag = "Clients",
    security(("bearer_auth" = [])),
    params(PaginationParams),
    responses(
        (status = 200, description = "Client list", body = PaginatedResponse<ClientDto>),
        (status = 403, description = "Admin only")
    )
)]
pub async fn list_clients(
    State(state): State<ClientHandlerState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<ClientDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(&auth)?;

    match state.client_service.find_all(params.page, params.limit).await {
        Ok(result) => {
            let items: Vec<ClientDto> = result.items.into_iter().map(ClientDto::from).collect();
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
