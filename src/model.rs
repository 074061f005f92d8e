use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Half-open stay interval `[check_in, check_out)`.
///
/// Comparisons are strict timestamp comparisons — a stay ending at the exact
/// instant another begins does not overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

impl Stay {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        debug_assert!(check_in < check_out, "Stay check_in must be before check_out");
        Self { check_in, check_out }
    }

    pub fn overlaps(&self, other: &Stay) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Whole nights between check-in and check-out, rounded down.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Closed set of room categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
}

/// A room in the catalog, keyed by its number.
///
/// A complimentary room is a flag plus a zero rate, not a subtype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub number: String,
    pub price_per_night: f64,
    pub room_type: RoomType,
    pub complimentary: bool,
}

impl Room {
    pub fn new(number: impl Into<String>, price_per_night: f64, room_type: RoomType) -> Self {
        debug_assert!(price_per_night >= 0.0, "Room price must be non-negative");
        Self {
            number: number.into(),
            price_per_night,
            room_type,
            complimentary: false,
        }
    }

    /// A free room: the rate is forced to zero.
    pub fn complimentary(number: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            number: number.into(),
            price_per_night: 0.0,
            room_type,
            complimentary: true,
        }
    }

    pub fn nightly_rate(&self) -> f64 {
        if self.complimentary { 0.0 } else { self.price_per_night }
    }
}

// Shape check only: local part, one '@', domain ending in a dotted tld.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// A customer record, keyed by email. Equality is value equality — two
/// records with the same email and names compare equal regardless of origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A confirmed booking. Customer and room are referenced by their keys,
/// never embedded — the entities are shared, not duplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Ulid,
    pub customer_email: String,
    pub room_number: String,
    pub stay: Stay,
}
