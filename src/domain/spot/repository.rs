//! Spot repository interface

use async_trait::async_trait;

use super::model::{NewSpot, Spot, SpotStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// Insert a new spot. The store enforces code uniqueness and
    /// reports a duplicate as `DomainError::UniqueViolation`.
    async fn insert(&self, spot: NewSpot) -> DomainResult<Spot>;

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Spot>>;

    /// First free spot in store order, if any.
    async fn find_first_free(&self) -> DomainResult<Option<Spot>>;

    async fn update_status(&self, code: &str, status: SpotStatus) -> DomainResult<()>;
}
