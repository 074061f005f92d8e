//! Facades consumed by surrounding presentation code. The stores are
//! constructed once at startup and injected — there is no ambient state.

use std::sync::Arc;

use crate::engine::{CustomerDirectory, EngineError, ReservationLedger, RoomCatalog};
use crate::model::{Customer, Reservation, Room, Stay};

/// Guest-facing surface: account creation, lookups, booking, availability.
pub struct HotelDesk {
    directory: Arc<CustomerDirectory>,
    ledger: Arc<ReservationLedger>,
}

impl HotelDesk {
    pub fn new(directory: Arc<CustomerDirectory>, ledger: Arc<ReservationLedger>) -> Self {
        Self { directory, ledger }
    }

    pub fn create_customer(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Customer, EngineError> {
        self.directory.add_customer(email, first_name, last_name)
    }

    pub fn customer(&self, email: &str) -> Option<Customer> {
        self.directory.get_customer(email)
    }

    pub fn room(&self, room_number: &str) -> Option<Room> {
        self.ledger.get_room(room_number)
    }

    /// Resolve the customer by email, then book.
    pub async fn book_room(
        &self,
        email: &str,
        room_number: &str,
        stay: Stay,
    ) -> Result<Reservation, EngineError> {
        let customer = self
            .directory
            .get_customer(email)
            .ok_or_else(|| EngineError::UnknownCustomer(email.to_string()))?;
        self.ledger.reserve_room(&customer, room_number, stay).await
    }

    pub async fn customer_reservations(
        &self,
        email: &str,
    ) -> Result<Vec<Reservation>, EngineError> {
        let customer = self
            .directory
            .get_customer(email)
            .ok_or_else(|| EngineError::UnknownCustomer(email.to_string()))?;
        Ok(self.ledger.customer_reservations(&customer).await)
    }

    pub async fn find_rooms(&self, stay: Stay) -> Result<Vec<Room>, EngineError> {
        self.ledger.find_available_rooms(stay).await
    }
}

/// Administrative surface: room registration and whole-store snapshots.
pub struct AdminDesk {
    catalog: Arc<RoomCatalog>,
    directory: Arc<CustomerDirectory>,
    ledger: Arc<ReservationLedger>,
}

impl AdminDesk {
    pub fn new(
        catalog: Arc<RoomCatalog>,
        directory: Arc<CustomerDirectory>,
        ledger: Arc<ReservationLedger>,
    ) -> Self {
        Self {
            catalog,
            directory,
            ledger,
        }
    }

    pub fn add_room(&self, room: Room) {
        self.catalog.add_room(room);
    }

    pub fn add_rooms(&self, rooms: Vec<Room>) {
        for room in rooms {
            self.catalog.add_room(room);
        }
    }

    pub fn room_count(&self) -> usize {
        self.catalog.room_count()
    }

    pub fn all_rooms(&self) -> Vec<Room> {
        self.ledger.all_rooms()
    }

    pub fn all_customers(&self) -> Vec<Customer> {
        self.directory.all_customers()
    }

    pub async fn all_reservations(&self) -> Vec<Reservation> {
        self.ledger.all_reservations().await
    }
}
