//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::client::ClientRepository;
use crate::domain::parking::ParkingRepository;
use crate::domain::spot::SpotRepository;
use crate::domain::user::UserRepository;
use crate::domain::RepositoryProvider;

use super::client_repository::SeaOrmClientRepository;
use super::parking_repository::SeaOrmParkingRepository;
use super::spot_repository::SeaOrmSpotRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    spots: SeaOrmSpotRepository,
    clients: SeaOrmClientRepository,
    parkings: SeaOrmParkingRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            spots: SeaOrmSpotRepository::new(db.clone()),
            clients: SeaOrmClientRepository::new(db.clone()),
            parkings: SeaOrmParkingRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn spots(&self) -> &dyn SpotRepository {
        &self.spots
    }

    fn clients(&self) -> &dyn ClientRepository {
        &self.clients
    }

    fn parkings(&self) -> &dyn ParkingRepository {
        &self.parkings
    }
}
