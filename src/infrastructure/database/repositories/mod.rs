//! SeaORM repository implementations

pub mod client_repository;
pub mod parking_repository;
pub mod repository_provider;
pub mod spot_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::shared::errors::DomainError;

/// Map a database error to the domain taxonomy.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map an insert failure, translating the driver's unique-constraint
/// rejection into a typed violation carrying the offending value.
/// The store is the sole arbiter of uniqueness; callers never pre-check.
pub(crate) fn insert_err(
    e: sea_orm::DbErr,
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> DomainError {
    let msg = e.to_string();
    if msg.contains("UNIQUE") || msg.contains("duplicate") {
        DomainError::unique_violation(entity, field, value)
    } else {
        db_err(e)
    }
}
