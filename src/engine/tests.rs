use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use super::*;
use crate::model::{Customer, Room, RoomType, Stay};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
}

fn stay(check_in: u32, check_out: u32) -> Stay {
    Stay::new(day(check_in), day(check_out))
}

/// Catalog with rooms "101" and "102", plus a ledger over it.
fn make_ledger() -> (Arc<RoomCatalog>, ReservationLedger) {
    let catalog = Arc::new(RoomCatalog::new());
    catalog.add_room(Room::new("101", 100.0, RoomType::Double));
    catalog.add_room(Room::new("102", 75.0, RoomType::Single));
    let ledger = ReservationLedger::new(catalog.clone());
    (catalog, ledger)
}

fn guest(email: &str) -> Customer {
    Customer::new(email, "Test", "Guest")
}

#[tokio::test]
async fn reserve_and_retrieve() {
    let (_, ledger) = make_ledger();
    let customer = guest("a@b.com");

    let reservation = ledger
        .reserve_room(&customer, "101", stay(10, 15))
        .await
        .unwrap();
    assert_eq!(reservation.room_number, "101");
    assert_eq!(reservation.customer_email, "a@b.com");

    let all = ledger.all_reservations().await;
    assert_eq!(all, vec![reservation]);
}

#[tokio::test]
async fn reserve_unknown_room_fails() {
    let (_, ledger) = make_ledger();
    let result = ledger.reserve_room(&guest("a@b.com"), "999", stay(10, 15)).await;
    assert_eq!(result, Err(EngineError::UnknownRoom("999".into())));
}

#[tokio::test]
async fn reserve_inverted_stay_fails() {
    let (_, ledger) = make_ledger();
    let inverted = Stay {
        check_in: day(15),
        check_out: day(10),
    };
    let result = ledger.reserve_room(&guest("a@b.com"), "101", inverted).await;
    assert!(matches!(result, Err(EngineError::InvalidStay(_))));
    assert!(ledger.all_reservations().await.is_empty());
}

#[tokio::test]
async fn overlapping_booking_rejected_with_conflict() {
    let (_, ledger) = make_ledger();
    let first = ledger
        .reserve_room(&guest("a@b.com"), "101", stay(10, 15))
        .await
        .unwrap();

    let result = ledger
        .reserve_room(&guest("c@d.com"), "101", stay(12, 16))
        .await;
    assert_eq!(result, Err(EngineError::Conflict(first.id)));
    assert_eq!(ledger.all_reservations().await.len(), 1);
}

#[tokio::test]
async fn back_to_back_stays_do_not_conflict() {
    let (_, ledger) = make_ledger();
    ledger
        .reserve_room(&guest("a@b.com"), "101", stay(10, 15))
        .await
        .unwrap();

    // New stay starts exactly at the existing checkout — half-open, no overlap.
    ledger
        .reserve_room(&guest("c@d.com"), "101", stay(15, 20))
        .await
        .unwrap();
    // And one ending exactly at the first check-in.
    ledger
        .reserve_room(&guest("e@f.com"), "101", stay(5, 10))
        .await
        .unwrap();

    assert_eq!(ledger.all_reservations().await.len(), 3);
}

#[tokio::test]
async fn same_stay_different_rooms_both_succeed() {
    let (_, ledger) = make_ledger();
    ledger
        .reserve_room(&guest("a@b.com"), "101", stay(10, 15))
        .await
        .unwrap();
    ledger
        .reserve_room(&guest("a@b.com"), "102", stay(10, 15))
        .await
        .unwrap();
    assert_eq!(ledger.all_reservations().await.len(), 2);
}

// ── Availability ─────────────────────────────────────────

async fn available_numbers(ledger: &ReservationLedger, s: Stay) -> Vec<String> {
    let mut numbers: Vec<String> = ledger
        .find_available_rooms(s)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.number)
        .collect();
    numbers.sort();
    numbers
}

#[tokio::test]
async fn availability_excludes_overlapping_rooms() {
    let (_, ledger) = make_ledger();
    ledger
        .reserve_room(&guest("a@b.com"), "101", stay(10, 15))
        .await
        .unwrap();

    // Strictly inside the booked stay.
    assert_eq!(available_numbers(&ledger, stay(12, 13)).await, vec!["102"]);
    // Partial overlap at the tail.
    assert_eq!(available_numbers(&ledger, stay(14, 16)).await, vec!["102"]);
}

#[tokio::test]
async fn availability_includes_adjacent_stays() {
    let (_, ledger) = make_ledger();
    ledger
        .reserve_room(&guest("a@b.com"), "101", stay(10, 15))
        .await
        .unwrap();

    // Starts exactly at the existing checkout.
    assert_eq!(
        available_numbers(&ledger, stay(15, 20)).await,
        vec!["101", "102"]
    );
    // Ends exactly at the existing check-in.
    assert_eq!(
        available_numbers(&ledger, stay(1, 10)).await,
        vec!["101", "102"]
    );
}

#[tokio::test]
async fn availability_with_no_bookings_returns_all_rooms() {
    let (_, ledger) = make_ledger();
    assert_eq!(
        available_numbers(&ledger, stay(1, 5)).await,
        vec!["101", "102"]
    );
}

#[tokio::test]
async fn availability_rejects_inverted_stay() {
    let (_, ledger) = make_ledger();
    let inverted = Stay {
        check_in: day(5),
        check_out: day(5),
    };
    let result = ledger.find_available_rooms(inverted).await;
    assert!(matches!(result, Err(EngineError::InvalidStay(_))));
}

// ── Customer reservation retrieval ───────────────────────

#[tokio::test]
async fn customer_reservations_match_by_email() {
    let (_, ledger) = make_ledger();
    let c = guest("c@hotel.com");
    let d = guest("d@hotel.com");

    let r1 = ledger.reserve_room(&c, "101", stay(1, 3)).await.unwrap();
    let r2 = ledger.reserve_room(&c, "102", stay(5, 8)).await.unwrap();
    ledger.reserve_room(&d, "101", stay(10, 12)).await.unwrap();

    let mut found = ledger.customer_reservations(&c).await;
    found.sort_by_key(|r| r.stay.check_in);
    assert_eq!(found, vec![r1, r2]);

    // A distinct Customer value with the same email still matches.
    let c_again = Customer::new("c@hotel.com", "Other", "Name");
    assert_eq!(ledger.customer_reservations(&c_again).await.len(), 2);
}

#[tokio::test]
async fn customer_with_no_reservations_gets_empty() {
    let (_, ledger) = make_ledger();
    assert!(ledger.customer_reservations(&guest("x@y.com")).await.is_empty());
}

// ── Catalog pass-throughs ────────────────────────────────

#[tokio::test]
async fn ledger_delegates_room_lookups() {
    let (catalog, ledger) = make_ledger();
    assert_eq!(ledger.get_room("101"), catalog.get_room("101"));
    assert!(ledger.get_room("999").is_none());
    assert_eq!(ledger.all_rooms().len(), 2);
}

// ── Concurrency ──────────────────────────────────────────

#[tokio::test]
async fn concurrent_overlapping_bookings_yield_one_winner() {
    let catalog = Arc::new(RoomCatalog::new());
    catalog.add_room(Room::new("101", 100.0, RoomType::Double));
    let ledger = Arc::new(ReservationLedger::new(catalog));

    let mut handles = Vec::new();
    for i in 0..16 {
        let ledger = ledger.clone();
        handles.push(tokio::spawn(async move {
            let customer = Customer::new(format!("g{i}@hotel.com"), "Guest", "N");
            ledger.reserve_room(&customer, "101", stay(10, 15)).await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(EngineError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(ledger.all_reservations().await.len(), 1);
}
