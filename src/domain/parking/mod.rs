//! Parking session aggregate — one vehicle's stay on one spot

pub mod model;
pub mod repository;

pub use model::{NewParkingSession, ParkingSession};
pub use repository::ParkingRepository;
