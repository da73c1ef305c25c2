//! Domain layer — entities, repository interfaces and the shared result type

pub mod client;
pub mod parking;
pub mod spot;
pub mod user;

use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let spot = repos.spots().find_by_code("A-01").await?;
///     let session = repos.parkings().find_by_receipt("20250110-101530-ABC1234").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn user::UserRepository;
    fn spots(&self) -> &dyn spot::SpotRepository;
    fn clients(&self) -> &dyn client::ClientRepository;
    fn parkings(&self) -> &dyn parking::ParkingRepository;
}

// Re-export commonly used types
pub use client::{Client, ClientRepository, NewClient};
pub use parking::{NewParkingSession, ParkingRepository, ParkingSession};
pub use spot::{NewSpot, Spot, SpotRepository, SpotStatus};
pub use user::{NewUser, User, UserRepository, UserRole};
