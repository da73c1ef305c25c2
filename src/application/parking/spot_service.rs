//! Spot management service

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewSpot, RepositoryProvider, Spot};
use crate::shared::errors::DomainError;

pub struct SpotService {
    repos: Arc<dyn RepositoryProvider>,
}

impl SpotService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a new spot. Code uniqueness is enforced by the store
    /// on insert; a duplicate surfaces as `UniqueViolation`.
    pub async fn insert(&self, code: &str) -> DomainResult<Spot> {
        let spot = self
            .repos
            .spots()
            .insert(NewSpot {
                code: code.to_string(),
            })
            .await?;

        info!(code = %spot.code, "Spot registered");
        Ok(spot)
    }

    pub async fn find_by_code(&self, code: &str) -> DomainResult<Spot> {
        self.repos
            .spots()
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::not_found("Spot", "code", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositories;

    fn service() -> SpotService {
        SpotService::new(Arc::new(InMemoryRepositories::new()))
    }

    #[tokio::test]
    async fn duplicate_code_is_rejected_by_store() {
        let svc = service();

        let first = svc.insert("A-01").await.unwrap();
        let err = svc.insert("A-01").await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::UniqueViolation { field: "code", .. }
        ));

        let found = svc.find_by_code("A-01").await.unwrap();
        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn missing_code_fails_with_not_found() {
        let svc = service();
        assert!(matches!(
            svc.find_by_code("Z-99").await.unwrap_err(),
            DomainError::NotFound { field: "code", .. }
        ));
    }

    #[tokio::test]
    async fn new_spot_starts_free() {
        let svc = service();
        let spot = svc.insert("B-02").await.unwrap();
        assert!(spot.is_free());
    }
}
