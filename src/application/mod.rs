//! Application layer — use-case services orchestrating the domain

pub mod identity;
pub mod parking;

pub use identity::{AuthResult, UserService};
pub use parking::{ClientService, ParkingService, SpotService};
