//! User repository interface

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. The store enforces username uniqueness and
    /// reports a duplicate as `DomainError::UniqueViolation`.
    async fn insert(&self, user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Replace the stored password hash; returns the updated user.
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> DomainResult<User>;
}
