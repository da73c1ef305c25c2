//! # Park Service
//!
//! Parking-lot management backend: users, clients, spots and vehicle
//! check-in/check-out sessions behind a JWT-secured REST API.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and invariants
//! - **application**: Use-case services (identity, parking)
//! - **infrastructure**: External concerns (database, crypto, in-memory storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-layer types (errors, pagination, validators)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
