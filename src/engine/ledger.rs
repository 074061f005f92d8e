use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use ulid::Ulid;

use crate::model::{Customer, Reservation, Room, Stay};
use crate::observability;

use super::{EngineError, RoomCatalog};

/// All reservations for one room, guarded by the room's own lock.
pub type SharedRoomBook = Arc<RwLock<Vec<Reservation>>>;

pub(crate) fn validate_stay(stay: &Stay) -> Result<(), EngineError> {
    if stay.check_in >= stay.check_out {
        return Err(EngineError::InvalidStay("check-in must be before check-out"));
    }
    Ok(())
}

/// Authoritative store of all reservations.
///
/// Rooms are resolved through the injected catalog; reservations are kept in
/// per-room books so a booking can check-and-insert atomically under that
/// room's write lock. Reservations live for the process lifetime — there is
/// no cancellation flow.
pub struct ReservationLedger {
    catalog: Arc<RoomCatalog>,
    books: DashMap<String, SharedRoomBook>,
}

impl ReservationLedger {
    pub fn new(catalog: Arc<RoomCatalog>) -> Self {
        Self {
            catalog,
            books: DashMap::new(),
        }
    }

    fn book_for(&self, room_number: &str) -> SharedRoomBook {
        self.books
            .entry(room_number.to_string())
            .or_default()
            .clone()
    }

    /// Book a room for a stay. Atomic check-and-insert: the scan for an
    /// overlapping reservation and the insert happen under the room book's
    /// write lock, so two overlapping bookings can never both succeed.
    pub async fn reserve_room(
        &self,
        customer: &Customer,
        room_number: &str,
        stay: Stay,
    ) -> Result<Reservation, EngineError> {
        validate_stay(&stay)?;
        let room = self
            .catalog
            .get_room(room_number)
            .ok_or_else(|| EngineError::UnknownRoom(room_number.to_string()))?;

        let book = self.book_for(&room.number);
        let mut guard = book.write().await;
        for existing in guard.iter() {
            if existing.stay.overlaps(&stay) {
                metrics::counter!(observability::RESERVATION_CONFLICTS_TOTAL).increment(1);
                return Err(EngineError::Conflict(existing.id));
            }
        }

        let reservation = Reservation {
            id: Ulid::new(),
            customer_email: customer.email.clone(),
            room_number: room.number,
            stay,
        };
        guard.push(reservation.clone());
        metrics::counter!(observability::RESERVATIONS_TOTAL).increment(1);
        info!(
            reservation = %reservation.id,
            room = %reservation.room_number,
            customer = %reservation.customer_email,
            "reservation confirmed"
        );
        Ok(reservation)
    }

    /// Every catalog room with no reservation overlapping the stay. Order is
    /// unspecified.
    pub async fn find_available_rooms(&self, stay: Stay) -> Result<Vec<Room>, EngineError> {
        validate_stay(&stay)?;
        metrics::counter!(observability::AVAILABILITY_QUERIES_TOTAL).increment(1);

        let mut available = Vec::new();
        for room in self.catalog.all_rooms() {
            if self.room_is_free(&room.number, &stay).await {
                available.push(room);
            }
        }
        debug!(
            free = available.len(),
            total = self.catalog.room_count(),
            "availability query"
        );
        Ok(available)
    }

    async fn room_is_free(&self, room_number: &str, stay: &Stay) -> bool {
        let Some(book) = self.books.get(room_number).map(|e| e.value().clone()) else {
            return true; // never booked
        };
        let guard = book.read().await;
        !guard.iter().any(|r| r.stay.overlaps(stay))
    }

    /// Every reservation held by the given customer, matched by email.
    pub async fn customer_reservations(&self, customer: &Customer) -> Vec<Reservation> {
        let mut found = Vec::new();
        for book in self.snapshot_books() {
            let guard = book.read().await;
            found.extend(
                guard
                    .iter()
                    .filter(|r| r.customer_email == customer.email)
                    .cloned(),
            );
        }
        found
    }

    pub async fn all_reservations(&self) -> Vec<Reservation> {
        let mut all = Vec::new();
        for book in self.snapshot_books() {
            let guard = book.read().await;
            all.extend(guard.iter().cloned());
        }
        all
    }

    // Clone the Arcs out first so no DashMap shard lock is held across an await.
    fn snapshot_books(&self) -> Vec<SharedRoomBook> {
        self.books.iter().map(|e| e.value().clone()).collect()
    }

    // ── Catalog pass-throughs ────────────────────────────────

    pub fn get_room(&self, room_number: &str) -> Option<Room> {
        self.catalog.get_room(room_number)
    }

    pub fn all_rooms(&self) -> Vec<Room> {
        self.catalog.all_rooms()
    }
}
