use dashmap::DashMap;
use tracing::{debug, warn};

use crate::model::Room;
use crate::observability;

/// Authoritative store of all rooms, keyed by room number.
///
/// Registration is insert-or-replace: replaying a number silently overwrites
/// the previous room (last write wins). Lookups never fault — a miss is
/// `None`, not an error.
#[derive(Debug, Default)]
pub struct RoomCatalog {
    rooms: DashMap<String, Room>,
}

impl RoomCatalog {
    pub fn new() -> Self {
        Self { rooms: DashMap::new() }
    }

    pub fn add_room(&self, room: Room) {
        let number = room.number.clone();
        let replaced = self.rooms.insert(number.clone(), room);
        metrics::counter!(observability::ROOMS_REGISTERED_TOTAL).increment(1);
        if replaced.is_some() {
            // Last write wins. Re-registration loses the prior record.
            warn!(room = %number, "room re-registered, replacing previous record");
            metrics::counter!(observability::ROOMS_REPLACED_TOTAL).increment(1);
        } else {
            debug!(room = %number, "room registered");
        }
    }

    pub fn get_room(&self, number: &str) -> Option<Room> {
        self.rooms.get(number).map(|e| e.value().clone())
    }

    /// Unordered snapshot of every registered room.
    pub fn all_rooms(&self) -> Vec<Room> {
        self.rooms.iter().map(|e| e.value().clone()).collect()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
