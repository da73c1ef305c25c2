//! Client management service

use std::sync::Arc;

use tracing::info;

use crate::domain::{Client, DomainResult, NewClient, RepositoryProvider};
use crate::shared::errors::DomainError;
use crate::shared::PaginatedResult;

pub struct ClientService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ClientService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Register a new client. CPF uniqueness is enforced by the store
    /// on insert; a duplicate surfaces as `UniqueViolation`.
    pub async fn insert(&self, name: &str, cpf: &str) -> DomainResult<Client> {
        let client = self
            .repos
            .clients()
            .insert(NewClient {
                name: name.to_string(),
                cpf: cpf.to_string(),
            })
            .await?;

        info!(client_id = client.id, "Client registered");
        Ok(client)
    }

    pub async fn find_by_id(&self, id: i64) -> DomainResult<Client> {
        self.repos
            .clients()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", "id", id.to_string()))
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Client> {
        self.repos
            .clients()
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", "cpf", cpf))
    }

    pub async fn find_all(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Client>> {
        self.repos.clients().find_all(page, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositories;

    fn service() -> ClientService {
        ClientService::new(Arc::new(InMemoryRepositories::new()))
    }

    #[tokio::test]
    async fn duplicate_cpf_is_rejected_by_store() {
        let svc = service();

        svc.insert("Ana Souza", "52998224725").await.unwrap();
        let err = svc.insert("Other Name", "52998224725").await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::UniqueViolation { field: "cpf", .. }
        ));
    }

    #[tokio::test]
    async fn missing_client_fails_with_not_found() {
        let svc = service();
        assert!(matches!(
            svc.find_by_id(7).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
        assert!(matches!(
            svc.find_by_cpf("11144477735").await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn listing_paginates_in_store_order() {
        let svc = service();
        svc.insert("Ana Souza", "52998224725").await.unwrap();
        svc.insert("Bia Lima", "11144477735").await.unwrap();

        let page = svc.find_all(1, 1).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Ana Souza");
    }
}
