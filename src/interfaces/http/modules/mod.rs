//! Per-resource HTTP modules

pub mod auth;
pub mod clients;
pub mod health;
pub mod parkings;
pub mod spots;
pub mod users;
