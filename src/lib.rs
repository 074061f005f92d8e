//! In-memory hotel reservation engine: a room catalog, a customer directory,
//! and a reservation ledger that books rooms and answers date-range
//! availability queries. All state is transient for the process lifetime.

pub mod api;
pub mod engine;
pub mod model;
pub mod observability;

pub use api::{AdminDesk, HotelDesk};
pub use engine::{CustomerDirectory, EngineError, ReservationLedger, RoomCatalog};
pub use model::{Customer, Reservation, Room, RoomType, Stay};
