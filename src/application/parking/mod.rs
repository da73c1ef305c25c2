//! Parking module — spots, clients and check-in/check-out sessions

pub mod client_service;
pub mod parking_service;
pub mod spot_service;

pub use client_service::ClientService;
pub use parking_service::{CheckIn, ParkingService};
pub use spot_service::SpotService;
