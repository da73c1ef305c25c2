//! Client repository interface

use async_trait::async_trait;

use super::model::{Client, NewClient};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client. The store enforces CPF uniqueness and
    /// reports a duplicate as `DomainError::UniqueViolation`.
    async fn insert(&self, client: NewClient) -> DomainResult<Client>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>>;
    async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Option<Client>>;
    async fn find_all(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Client>>;
}
