//! Client DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Client;
use crate::shared::validations::validate_cpf;

/// Client API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientDto {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            cpf: c.cpf,
            created_at: c.created_at,
        }
    }
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 5, max = 100, message = "name must be 5-100 characters"))]
    pub name: String,
    #[validate(custom(function = validate_cpf))]
    pub cpf: String,
}
