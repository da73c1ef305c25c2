//! Client domain entity

use chrono::{DateTime, Utc};

/// A registered parking client. Created once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: i64,
    pub name: String,
    /// Unique national tax identifier (CPF), 11 digits
    pub cpf: String,
    pub created_at: DateTime<Utc>,
}

/// Client data for insertion
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub cpf: String,
}
