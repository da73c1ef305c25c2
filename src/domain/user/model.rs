//! User domain entity

use chrono::{DateTime, Utc};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Full access: manages spots, clients and parking sessions
    Admin,
    /// Regular account holder
    Client,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Client
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Client => "client",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "client" => Some(Self::Client),
            _ => None,
        }
    }
}

/// Registered user account
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned numeric ID
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User data for insertion; the store assigns the ID and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!(UserRole::from_str("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_str("client"), Some(UserRole::Client));
        assert_eq!(UserRole::from_str("root"), None);
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }

    #[test]
    fn default_role_is_client() {
        assert_eq!(UserRole::default(), UserRole::Client);
    }
}
