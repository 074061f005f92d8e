mod catalog;
mod directory;
mod error;
mod ledger;
#[cfg(test)]
mod tests;

pub use catalog::RoomCatalog;
pub use directory::CustomerDirectory;
pub use error::EngineError;
pub use ledger::{ReservationLedger, SharedRoomBook};
