//! Parking spot aggregate

pub mod model;
pub mod repository;

pub use model::{NewSpot, Spot, SpotStatus};
pub use repository::SpotRepository;
