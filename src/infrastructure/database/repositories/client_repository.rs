use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{db_err, insert_err};
use crate::domain::{Client, ClientRepository, DomainResult, NewClient};
use crate::infrastructure::database::entities::client;
use crate::shared::PaginatedResult;

pub struct SeaOrmClientRepository {
    db: DatabaseConnection,
}

impl SeaOrmClientRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: client::Model) -> Client {
    Client {
        id: model.id,
        name: model.name,
        cpf: model.cpf,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn insert(&self, new: NewClient) -> DomainResult<Client> {
        let cpf = new.cpf.clone();

        let active = client::ActiveModel {
            name: Set(new.name),
            cpf: Set(new.cpf),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Client", "cpf", &cpf))?;

        Ok(model_to_domain(model))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>> {
        let model = client::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Option<Client>> {
        let model = client::Entity::find()
            .filter(client::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn find_all(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Client>> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let query = client::Entity::find().order_by_asc(client::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = ((page - 1) * limit) as u64;
        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<Client> = models.into_iter().map(model_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
