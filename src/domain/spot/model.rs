//! Parking spot domain entity

use chrono::{DateTime, Utc};

/// Spot occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotStatus {
    Free,
    Occupied,
}

impl SpotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Occupied => "occupied",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "free" => Some(Self::Free),
            "occupied" => Some(Self::Occupied),
            _ => None,
        }
    }
}

/// A single designated parking location identified by a short code
#[derive(Debug, Clone)]
pub struct Spot {
    pub id: i64,
    /// Unique human-readable slot label, e.g. "A-01"
    pub code: String,
    pub status: SpotStatus,
    pub created_at: DateTime<Utc>,
}

impl Spot {
    pub fn is_free(&self) -> bool {
        self.status == SpotStatus::Free
    }
}

/// Spot data for insertion; new spots always start free.
#[derive(Debug, Clone)]
pub struct NewSpot {
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spot() -> Spot {
        Spot {
            id: 1,
            code: "A-01".to_string(),
            status: SpotStatus::Free,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_spot_is_free() {
        let spot = sample_spot();
        assert!(spot.is_free());
    }

    #[test]
    fn occupied_spot_is_not_free() {
        let mut spot = sample_spot();
        spot.status = SpotStatus::Occupied;
        assert!(!spot.is_free());
    }

    #[test]
    fn status_round_trips_through_str() {
        assert_eq!(SpotStatus::from_str("free"), Some(SpotStatus::Free));
        assert_eq!(SpotStatus::from_str("occupied"), Some(SpotStatus::Occupied));
        assert_eq!(SpotStatus::from_str("busy"), None);
    }
}
