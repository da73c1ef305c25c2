//! Parking session repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{NewParkingSession, ParkingSession};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ParkingRepository: Send + Sync {
    /// Insert a check-in record. The store enforces receipt uniqueness
    /// and reports a duplicate as `DomainError::UniqueViolation`.
    async fn insert(&self, session: NewParkingSession) -> DomainResult<ParkingSession>;

    async fn find_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>>;

    /// Open session (no exit date yet) for the given receipt.
    async fn find_open_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>>;

    /// Close the open session for `receipt`; returns the updated record.
    async fn set_exit(
        &self,
        receipt: &str,
        exit_date: DateTime<Utc>,
    ) -> DomainResult<ParkingSession>;

    async fn find_by_client_cpf(
        &self,
        cpf: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<ParkingSession>>;
}
