//! Spot DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Spot;

/// Spot API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpotDto {
    pub id: i64,
    pub code: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Spot> for SpotDto {
    fn from(s: Spot) -> Self {
        Self {
            id: s.id,
            code: s.code,
            status: s.status.as_str().to_string(),
            created_at: s.created_at,
        }
    }
}

/// Create spot request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSpotRequest {
    #[validate(length(equal = 4, message = "code must be exactly 4 characters"))]
    pub code: String,
}
