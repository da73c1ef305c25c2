//! Parking session domain entity

use chrono::{DateTime, Utc};

/// A vehicle check-in record. Open while `exit_date` is `None`.
#[derive(Debug, Clone)]
pub struct ParkingSession {
    pub id: i64,
    /// Unique ticket number handed to the driver, `yyyyMMdd-HHmmss-PLATE`
    pub receipt: String,
    /// Vehicle license plate, `XXX-0000`
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    /// CPF of the client the vehicle belongs to
    pub client_cpf: String,
    /// Code of the spot the vehicle occupies
    pub spot_code: String,
    pub entry_date: DateTime<Utc>,
    pub exit_date: Option<DateTime<Utc>>,
}

impl ParkingSession {
    pub fn is_open(&self) -> bool {
        self.exit_date.is_none()
    }

    pub fn close(&mut self, at: DateTime<Utc>) {
        self.exit_date = Some(at);
    }
}

/// Session data for check-in; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewParkingSession {
    pub receipt: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub client_cpf: String,
    pub spot_code: String,
    pub entry_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> ParkingSession {
        ParkingSession {
            id: 1,
            receipt: "20250110-101530-ABC1234".to_string(),
            plate: "ABC-1234".to_string(),
            brand: "Fiat".to_string(),
            model: "Palio".to_string(),
            color: "Blue".to_string(),
            client_cpf: "52998224725".to_string(),
            spot_code: "A-01".to_string(),
            entry_date: Utc::now(),
            exit_date: None,
        }
    }

    #[test]
    fn new_session_is_open() {
        let session = sample_session();
        assert!(session.is_open());
        assert!(session.exit_date.is_none());
    }

    #[test]
    fn close_sets_exit_date() {
        let mut session = sample_session();
        let now = Utc::now();
        session.close(now);
        assert!(!session.is_open());
        assert_eq!(session.exit_date, Some(now));
    }
}
