//! In-memory repositories for development and testing
//!
//! Mirrors the uniqueness semantics of the database store: an insert
//! with a duplicate unique key is rejected by the map itself, never by
//! a caller-side pre-check.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{
    Client, ClientRepository, DomainResult, NewClient, NewParkingSession, NewSpot, NewUser,
    ParkingRepository, ParkingSession, RepositoryProvider, Spot, SpotRepository, SpotStatus, User,
    UserRepository,
};
use crate::shared::errors::DomainError;
use crate::shared::PaginatedResult;

/// All four repositories in one struct, backed by concurrent maps.
pub struct InMemoryRepositories {
    users: DashMap<i64, User>,
    usernames: DashMap<String, i64>,
    spots: DashMap<i64, Spot>,
    spot_codes: DashMap<String, i64>,
    clients: DashMap<i64, Client>,
    client_cpfs: DashMap<String, i64>,
    sessions: DashMap<i64, ParkingSession>,
    receipts: DashMap<String, i64>,
    user_counter: AtomicI64,
    spot_counter: AtomicI64,
    client_counter: AtomicI64,
    session_counter: AtomicI64,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            usernames: DashMap::new(),
            spots: DashMap::new(),
            spot_codes: DashMap::new(),
            clients: DashMap::new(),
            client_cpfs: DashMap::new(),
            sessions: DashMap::new(),
            receipts: DashMap::new(),
            user_counter: AtomicI64::new(1),
            spot_counter: AtomicI64::new(1),
            client_counter: AtomicI64::new(1),
            session_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositories {
    fn users(&self) -> &dyn UserRepository {
        self
    }

    fn spots(&self) -> &dyn SpotRepository {
        self
    }

    fn clients(&self) -> &dyn ClientRepository {
        self
    }

    fn parkings(&self) -> &dyn ParkingRepository {
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryRepositories {
    async fn insert(&self, new: NewUser) -> DomainResult<User> {
        // The username index entry is the uniqueness arbiter
        match self.usernames.entry(new.username.clone()) {
            Entry::Occupied(_) => Err(DomainError::unique_violation(
                "User",
                "username",
                new.username,
            )),
            Entry::Vacant(slot) => {
                let id = self.user_counter.fetch_add(1, Ordering::SeqCst);
                let now = Utc::now();
                let user = User {
                    id,
                    username: new.username,
                    password_hash: new.password_hash,
                    role: new.role,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(id);
                self.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> DomainResult<User> {
        let Some(mut user) = self.users.get_mut(&id) else {
            return Err(DomainError::not_found("User", "id", id.to_string()));
        };
        user.password_hash = password_hash.to_string();
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl SpotRepository for InMemoryRepositories {
    async fn insert(&self, new: NewSpot) -> DomainResult<Spot> {
        match self.spot_codes.entry(new.code.clone()) {
            Entry::Occupied(_) => Err(DomainError::unique_violation("Spot", "code", new.code)),
            Entry::Vacant(slot) => {
                let id = self.spot_counter.fetch_add(1, Ordering::SeqCst);
                let spot = Spot {
                    id,
                    code: new.code,
                    status: SpotStatus::Free,
                    created_at: Utc::now(),
                };
                slot.insert(id);
                self.spots.insert(id, spot.clone());
                Ok(spot)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> DomainResult<Option<Spot>> {
        let Some(id) = self.spot_codes.get(code).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.spots.get(&id).map(|s| s.value().clone()))
    }

    async fn find_first_free(&self) -> DomainResult<Option<Spot>> {
        let free = self
            .spots
            .iter()
            .filter(|s| s.is_free())
            .map(|s| s.value().clone())
            .min_by_key(|s| s.id);
        Ok(free)
    }

    async fn update_status(&self, code: &str, status: SpotStatus) -> DomainResult<()> {
        let Some(id) = self.spot_codes.get(code).map(|id| *id) else {
            return Err(DomainError::not_found("Spot", "code", code));
        };
        let Some(mut spot) = self.spots.get_mut(&id) else {
            return Err(DomainError::not_found("Spot", "code", code));
        };
        spot.status = status;
        Ok(())
    }
}

#[async_trait]
impl ClientRepository for InMemoryRepositories {
    async fn insert(&self, new: NewClient) -> DomainResult<Client> {
        match self.client_cpfs.entry(new.cpf.clone()) {
            Entry::Occupied(_) => Err(DomainError::unique_violation("Client", "cpf", new.cpf)),
            Entry::Vacant(slot) => {
                let id = self.client_counter.fetch_add(1, Ordering::SeqCst);
                let client = Client {
                    id,
                    name: new.name,
                    cpf: new.cpf,
                    created_at: Utc::now(),
                };
                slot.insert(id);
                self.clients.insert(id, client.clone());
                Ok(client)
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Client>> {
        Ok(self.clients.get(&id).map(|c| c.value().clone()))
    }

    async fn find_by_cpf(&self, cpf: &str) -> DomainResult<Option<Client>> {
        let Some(id) = self.client_cpfs.get(cpf).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.clients.get(&id).map(|c| c.value().clone()))
    }

    async fn find_all(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Client>> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let mut clients: Vec<Client> = self.clients.iter().map(|c| c.value().clone()).collect();
        clients.sort_by_key(|c| c.id);

        let total = clients.len() as u64;
        let offset = ((page - 1) * limit) as usize;
        let items: Vec<Client> = clients
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}

#[async_trait]
impl ParkingRepository for InMemoryRepositories {
    async fn insert(&self, new: NewParkingSession) -> DomainResult<ParkingSession> {
        match self.receipts.entry(new.receipt.clone()) {
            Entry::Occupied(_) => Err(DomainError::unique_violation(
                "Parking session",
                "receipt",
                new.receipt,
            )),
            Entry::Vacant(slot) => {
                let id = self.session_counter.fetch_add(1, Ordering::SeqCst);
                let session = ParkingSession {
                    id,
                    receipt: new.receipt,
                    plate: new.plate,
                    brand: new.brand,
                    model: new.model,
                    color: new.color,
                    client_cpf: new.client_cpf,
                    spot_code: new.spot_code,
                    entry_date: new.entry_date,
                    exit_date: None,
                };
                slot.insert(id);
                self.sessions.insert(id, session.clone());
                Ok(session)
            }
        }
    }

    async fn find_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>> {
        let Some(id) = self.receipts.get(receipt).map(|id| *id) else {
            return Ok(None);
        };
        Ok(self.sessions.get(&id).map(|s| s.value().clone()))
    }

    async fn find_open_by_receipt(&self, receipt: &str) -> DomainResult<Option<ParkingSession>> {
        Ok(self
            .find_by_receipt(receipt)
            .await?
            .filter(ParkingSession::is_open))
    }

    async fn set_exit(
        &self,
        receipt: &str,
        exit_date: DateTime<Utc>,
    ) -> DomainResult<ParkingSession> {
        let Some(id) = self.receipts.get(receipt).map(|id| *id) else {
            return Err(DomainError::not_found("Parking session", "receipt", receipt));
        };
        let Some(mut session) = self.sessions.get_mut(&id) else {
            return Err(DomainError::not_found("Parking session", "receipt", receipt));
        };
        if !session.is_open() {
            return Err(DomainError::not_found("Parking session", "receipt", receipt));
        }
        session.close(exit_date);
        Ok(session.clone())
    }

    async fn find_by_client_cpf(
        &self,
        cpf: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<ParkingSession>> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let mut sessions: Vec<ParkingSession> = self
            .sessions
            .iter()
            .filter(|s| s.client_cpf == cpf)
            .map(|s| s.value().clone())
            .collect();
        sessions.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));

        let total = sessions.len() as u64;
        let offset = ((page - 1) * limit) as usize;
        let items: Vec<ParkingSession> = sessions
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        Ok(PaginatedResult::new(items, total, page, limit))
    }
}
