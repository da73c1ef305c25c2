//! Database entities module

pub mod client;
pub mod parking_session;
pub mod spot;
pub mod user;

pub use client::Entity as Client;
pub use parking_session::Entity as ParkingSession;
pub use spot::Entity as Spot;
pub use user::Entity as User;
