//! Parking session service — vehicle check-in and check-out

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    DomainResult, NewParkingSession, ParkingSession, RepositoryProvider, SpotStatus,
};
use crate::shared::errors::DomainError;
use crate::shared::PaginatedResult;

/// Vehicle data supplied at check-in
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub client_cpf: String,
}

pub struct ParkingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ParkingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Check a vehicle in: the client must exist, a free spot is
    /// claimed, and an open session with a fresh receipt is stored.
    pub async fn check_in(&self, data: CheckIn) -> DomainResult<ParkingSession> {
        let client = self
            .repos
            .clients()
            .find_by_cpf(&data.client_cpf)
            .await?
            .ok_or_else(|| DomainError::not_found("Client", "cpf", data.client_cpf.clone()))?;

        let spot = self
            .repos
            .spots()
            .find_first_free()
            .await?
            .ok_or_else(|| DomainError::not_found("Spot", "status", "free"))?;

        let entry_date = Utc::now();
        let receipt = generate_receipt(entry_date, &data.plate);

        let session = self
            .repos
            .parkings()
            .insert(NewParkingSession {
                receipt,
                plate: data.plate,
                brand: data.brand,
                model: data.model,
                color: data.color,
                client_cpf: client.cpf,
                spot_code: spot.code.clone(),
                entry_date,
            })
            .await?;

        self.repos
            .spots()
            .update_status(&spot.code, SpotStatus::Occupied)
            .await?;

        info!(receipt = %session.receipt, spot = %session.spot_code, "Vehicle checked in");
        Ok(session)
    }

    /// Check a vehicle out: closes the open session for `receipt` and
    /// frees its spot. A missing or already-closed receipt is `NotFound`.
    pub async fn check_out(&self, receipt: &str) -> DomainResult<ParkingSession> {
        let open = self
            .repos
            .parkings()
            .find_open_by_receipt(receipt)
            .await?
            .ok_or_else(|| DomainError::not_found("Parking session", "receipt", receipt))?;

        let closed = self.repos.parkings().set_exit(&open.receipt, Utc::now()).await?;

        self.repos
            .spots()
            .update_status(&closed.spot_code, SpotStatus::Free)
            .await?;

        info!(receipt = %closed.receipt, spot = %closed.spot_code, "Vehicle checked out");
        Ok(closed)
    }

    pub async fn find_by_receipt(&self, receipt: &str) -> DomainResult<ParkingSession> {
        self.repos
            .parkings()
            .find_by_receipt(receipt)
            .await?
            .ok_or_else(|| DomainError::not_found("Parking session", "receipt", receipt))
    }

    pub async fn find_by_client_cpf(
        &self,
        cpf: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<ParkingSession>> {
        self.repos.parkings().find_by_client_cpf(cpf, page, limit).await
    }
}

/// Ticket number handed to the driver: `yyyyMMdd-HHmmss-PLATE`.
/// The plate suffix keeps simultaneous check-ins from colliding.
fn generate_receipt(at: DateTime<Utc>, plate: &str) -> String {
    format!("{}-{}", at.format("%Y%m%d-%H%M%S"), plate.replace('-', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositories;

    struct Fixture {
        repos: Arc<InMemoryRepositories>,
        parkings: ParkingService,
    }

    /// One registered client ("52998224725") and one free spot ("A-01")
    async fn fixture() -> Fixture {
        use crate::domain::{NewClient, NewSpot};

        let repos = Arc::new(InMemoryRepositories::new());
        let provider: Arc<dyn RepositoryProvider> = repos.clone();

        provider
            .clients()
            .insert(NewClient {
                name: "Ana Souza".to_string(),
                cpf: "52998224725".to_string(),
            })
            .await
            .unwrap();
        provider
            .spots()
            .insert(NewSpot {
                code: "A-01".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            repos,
            parkings: ParkingService::new(provider),
        }
    }

    fn check_in_data() -> CheckIn {
        CheckIn {
            plate: "ABC-1234".to_string(),
            brand: "Fiat".to_string(),
            model: "Palio".to_string(),
            color: "Blue".to_string(),
            client_cpf: "52998224725".to_string(),
        }
    }

    #[tokio::test]
    async fn check_in_claims_a_free_spot() {
        let fx = fixture().await;

        let session = fx.parkings.check_in(check_in_data()).await.unwrap();
        assert!(session.is_open());
        assert_eq!(session.spot_code, "A-01");
        assert!(!session.receipt.is_empty());

        let spot = fx.repos.spots().find_by_code("A-01").await.unwrap().unwrap();
        assert_eq!(spot.status, SpotStatus::Occupied);
    }

    #[tokio::test]
    async fn check_in_with_unknown_client_fails_with_not_found() {
        let fx = fixture().await;

        let mut data = check_in_data();
        data.client_cpf = "11144477735".to_string();

        let err = fx.parkings.check_in(data).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound { entity: "Client", .. }
        ));
    }

    #[tokio::test]
    async fn check_in_without_free_spot_fails_with_not_found() {
        let fx = fixture().await;

        fx.parkings.check_in(check_in_data()).await.unwrap();

        let mut second = check_in_data();
        second.plate = "XYZ-9876".to_string();
        let err = fx.parkings.check_in(second).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Spot", .. }));
    }

    #[tokio::test]
    async fn check_out_closes_session_and_frees_spot() {
        let fx = fixture().await;

        let session = fx.parkings.check_in(check_in_data()).await.unwrap();
        let closed = fx.parkings.check_out(&session.receipt).await.unwrap();

        assert!(!closed.is_open());
        assert!(closed.exit_date.is_some());

        let spot = fx.repos.spots().find_by_code("A-01").await.unwrap().unwrap();
        assert_eq!(spot.status, SpotStatus::Free);
    }

    #[tokio::test]
    async fn check_out_with_unknown_receipt_fails_with_not_found() {
        let fx = fixture().await;
        let err = fx.parkings.check_out("20250110-101530-ZZZ0000").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn check_out_twice_fails_with_not_found() {
        let fx = fixture().await;

        let session = fx.parkings.check_in(check_in_data()).await.unwrap();
        fx.parkings.check_out(&session.receipt).await.unwrap();

        let err = fx.parkings.check_out(&session.receipt).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn history_by_cpf_lists_sessions() {
        let fx = fixture().await;

        let session = fx.parkings.check_in(check_in_data()).await.unwrap();
        fx.parkings.check_out(&session.receipt).await.unwrap();

        let history = fx
            .parkings
            .find_by_client_cpf("52998224725", 1, 10)
            .await
            .unwrap();
        assert_eq!(history.total, 1);
        assert_eq!(history.items[0].receipt, session.receipt);
    }
}
