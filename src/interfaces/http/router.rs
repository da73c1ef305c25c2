//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{ClientService, ParkingService, SpotService, UserService};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::common::{ApiResponse, PaginatedResponse, PaginationParams};
use super::modules::{auth, clients, health, parkings, spots, users};

/// Unified state for all routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub user_service: Arc<UserService>,
    pub spot_service: Arc<SpotService>,
    pub client_service: Arc<ClientService>,
    pub parking_service: Arc<ParkingService>,
    pub auth: AuthState,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiState> for auth::AuthHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        auth::AuthHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<ApiState> for users::UserHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<ApiState> for spots::SpotHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        spots::SpotHandlerState {
            spot_service: Arc::clone(&s.spot_service),
        }
    }
}

impl FromRef<ApiState> for clients::ClientHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        clients::ClientHandlerState {
            client_service: Arc::clone(&s.client_service),
        }
    }
}

impl FromRef<ApiState> for parkings::ParkingHandlerState {
    fn from_ref(s: &ApiState) -> Self {
        parkings::ParkingHandlerState {
            parking_service: Arc::clone(&s.parking_service),
        }
    }
}

impl FromRef<ApiState> for AuthState {
    fn from_ref(s: &ApiState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        // Users
        users::handlers::create_user,
        users::handlers::get_user,
        users::handlers::list_users,
        users::handlers::update_password,
        // Spots
        spots::handlers::create_spot,
        spots::handlers::get_spot,
        // Clients
        clients::handlers::create_client,
        clients::handlers::get_client,
        clients::handlers::list_clients,
        // Parkings
        parkings::handlers::check_in,
        parkings::handlers::check_out,
        parkings::handlers::get_by_receipt,
        parkings::handlers::list_by_cpf,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            // Auth
            auth::dto::LoginRequest,
            auth::dto::LoginResponse,
            auth::dto::UserInfo,
            // Users
            users::dto::UserDto,
            users::dto::CreateUserRequest,
            users::dto::UpdatePasswordRequest,
            // Spots
            spots::dto::SpotDto,
            spots::dto::CreateSpotRequest,
            // Clients
            clients::dto::ClientDto,
            clients::dto::CreateClientRequest,
            PaginatedResponse<clients::dto::ClientDto>,
            // Parkings
            parkings::dto::ParkingSessionDto,
            parkings::dto::CheckInRequest,
            PaginatedResponse<parkings::dto::ParkingSessionDto>,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User login (JWT bearer tokens)"),
        (name = "Users", description = "User registration, lookup and password change"),
        (name = "Spots", description = "Parking spot management"),
        (name = "Clients", description = "Parking client registration and lookup"),
        (name = "Parkings", description = "Vehicle check-in / check-out sessions"),
    ),
    info(
        title = "Park Service API",
        version = "1.0.0",
        description = "REST API for managing a parking lot: users, clients, spots and parking sessions",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    user_service: Arc<UserService>,
    spot_service: Arc<SpotService>,
    client_service: Arc<ClientService>,
    parking_service: Arc<ParkingService>,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState { jwt_config };

    let state = ApiState {
        user_service,
        spot_service,
        client_service,
        parking_service,
        auth: auth_state.clone(),
    };

    // Auth routes (public)
    let auth_routes = Router::new().route("/login", post(auth::handlers::login));

    // User routes: reads and password changes require a token,
    // registration is public (route added after the auth layer).
    let user_routes = Router::new()
        .route("/", get(users::handlers::list_users))
        .route(
            "/{id}",
            get(users::handlers::get_user).patch(users::handlers::update_password),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .route("/", post(users::handlers::create_user));

    // Spot routes (protected)
    let spot_routes = Router::new()
        .route("/", post(spots::handlers::create_spot))
        .route("/{code}", get(spots::handlers::get_spot))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Client routes (protected)
    let client_routes = Router::new()
        .route(
            "/",
            get(clients::handlers::list_clients).post(clients::handlers::create_client),
        )
        .route("/{id}", get(clients::handlers::get_client))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ));

    // Parking routes (protected)
    let parking_routes = Router::new()
        .route("/check-in", post(parkings::handlers::check_in))
        .route("/check-out/{receipt}", put(parkings::handlers::check_out))
        .route("/cpf/{cpf}", get(parkings::handlers::list_by_cpf))
        .route("/{receipt}", get(parkings::handlers::get_by_receipt))
        .route_layer(middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        // Resources
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/users", user_routes)
        .nest("/api/v1/spots", spot_routes)
        .nest("/api/v1/clients", client_routes)
        .nest("/api/v1/parkings", parking_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
