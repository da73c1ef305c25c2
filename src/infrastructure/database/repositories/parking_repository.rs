use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, insert_err};
use crate::domain::{DomainResult, NewParkingSession, ParkingRepository, ParkingSession};
use crate::infrastructure::database::entities::parking_session;
use crate::shared::errors::DomainError;
use crate::shared::PaginatedResult;

pub struct SeaOrmParkingRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: parking_session::Model) -> ParkingSession {
    ParkingSession {
        id: model.id,
        receipt: model.receipt,
        plate: model.plate,
        brand: model.brand,
        model: model.model,
        color: model.color,
        client_cpf: model.client_cpf,
        spot_code: model.spot_code,
        entry_date: model.entry_date,
        exit_date: model.exit_date,
    }
}

#[async_trait]
impl ParkingRepository for SeaOrmParkingRepository {
    async fn insert(&self, new: NewParkingSession) -> DomainResult<ParkingSession> {
        let receipt = new.receipt.clone();

        let active = parking_session::ActiveModel {
            receipt: Set(new.receipt),
            plate: Set(new.plate),
            brand: Set(new.brand),
            model: Set(new.model),
            color: Set(new.color),
            client_cpf: Set(new.client_cpf),
            spot_code: Set(new.spot_code),
            entry_date: Set(new.entry_date),
            exit_date: Set(None),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Parking session", "receipt", &receipt))?;

        Ok(model_to_domain(model))
    }

    async fn find_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>> {
        let model = parking_session::Entity::find()
            .filter(parking_session::Column::Receipt.eq(receipt))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_open_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>> {
        let model = parking_session::Entity::find()
            .filter(parking_session::Column::Receipt.eq(receipt))
            .filter(parking_session::Column::ExitDate.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn set_exit(
        &self,
        receipt: &str,
        exit_date: DateTime<Utc>,
    ) -> DomainResult<ParkingSession> {
        let existing = parking_session::Entity::find()
            .filter(parking_session::Column::Receipt.eq(receipt))
            .filter(parking_session::Column::ExitDate.is_null())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Parking session", "receipt", receipt));
        };

        let mut active: parking_session::ActiveModel = existing.into();
        active.exit_date = Set(Some(exit_date));
        let updated = active.update(&self.db).await.map_err(db_err)?;

        Ok(model_to_domain(updated))
    }

    async fn find_by_client_cpf(
        &self,
        cpf: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<ParkingSession>> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let query = parking_session::Entity::find()
            .filter(parking_session::Column::ClientCpf.eq(cpf))
            .order_by_desc(parking_session::Column::EntryDate);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = ((page - 1) * limit) as u64;
        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<ParkingSession> = models.into_iter().map(model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
