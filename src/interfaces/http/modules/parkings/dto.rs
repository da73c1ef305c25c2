//! Parking session DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ParkingSession;
use crate::shared::validations::{validate_cpf, validate_plate};

/// Parking session API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParkingSessionDto {
    pub id: i64,
    pub receipt: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub client_cpf: String,
    pub spot_code: String,
    pub entry_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<DateTime<Utc>>,
}

impl From<ParkingSession> for ParkingSessionDto {
    fn from(s: ParkingSession) -> Self {
        Self {
            id: s.id,
            receipt: s.receipt,
            plate: s.plate,
            brand: s.brand,
            model: s.model,
            color: s.color,
            client_cpf: s.client_cpf,
            spot_code: s.spot_code,
            entry_date: s.entry_date,
            exit_date: s.exit_date,
        }
    }
}

/// Check-in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckInRequest {
    #[validate(custom(function = validate_plate))]
    pub plate: String,
    #[validate(length(min = 1, max = 45, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, max = 45, message = "model is required"))]
    pub model: String,
    #[validate(length(min = 1, max = 45, message = "color is required"))]
    pub color: String,
    #[validate(custom(function = validate_cpf))]
    pub client_cpf: String,
}
