use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{db_err, insert_err};
use crate::domain::{DomainResult, NewSpot, Spot, SpotRepository, SpotStatus};
use crate::infrastructure::database::entities::spot;
use crate::shared::errors::DomainError;

pub struct SeaOrmSpotRepository {
    db: DatabaseConnection,
}

impl SeaOrmSpotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_status_to_domain(status: spot::SpotStatus) -> SpotStatus {
    match status {
        spot::SpotStatus::Free => SpotStatus::Free,
        spot::SpotStatus::Occupied => SpotStatus::Occupied,
    }
}

fn domain_status_to_entity(status: SpotStatus) -> spot::SpotStatus {
    match status {
        SpotStatus::Free => spot::SpotStatus::Free,
        SpotStatus::Occupied => spot::SpotStatus::Occupied,
    }
}

fn model_to_domain(model: spot::Model) -> Spot {
    Spot {
        id: model.id,
        code: model.code,
        status: entity_status_to_domain(model.status),
        created_at: model.created_at,
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl SpotRepository for SeaOrmSpotRepository {
    async fn insert(&self, new: NewSpot) -> DomainResult<Spot> {
        let code = new.code.clone();

        let active = spot::ActiveModel {
            code: Set(new.code),
            status: Set(spot::SpotStatus::Free),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Spot", "code", &code))?;

        Ok(model_to_domain(model))
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Spot>> {
        let model = spot::Entity::find()
            .filter(spot::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_first_free(&self) -> DomainResult<Option<Spot>> {
        let model = spot::Entity::find()
            .filter(spot::Column::Status.eq(spot::SpotStatus::Free))
            .order_by_asc(spot::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn update_status(&self, code: &str, status: SpotStatus) -> DomainResult<()> {
        let existing = spot::Entity::find()
            .filter(spot::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Spot", "code", code));
        };

        let mut active: spot::ActiveModel = existing.into();
        active.status = Set(domain_status_to_entity(status));
        active.update(&self.db).await.map_err(db_err)?;

        Ok(())
    }
}
