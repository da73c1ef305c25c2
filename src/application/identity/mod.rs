//! Identity module — user management & authentication
//!
//! Contains the `UserService` which orchestrates all user-related
//! use-cases: registration, lookups, password changes and login.

pub mod service;

pub use service::{AuthResult, UserService};
