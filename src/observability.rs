// ── Operation counters ──────────────────────────────────────────

/// Counter: rooms registered (including replacements).
pub const ROOMS_REGISTERED_TOTAL: &str = "innkeep_rooms_registered_total";

/// Counter: room registrations that replaced an existing record.
pub const ROOMS_REPLACED_TOTAL: &str = "innkeep_rooms_replaced_total";

/// Counter: customers registered (including overwrites).
pub const CUSTOMERS_REGISTERED_TOTAL: &str = "innkeep_customers_registered_total";

/// Counter: reservations confirmed.
pub const RESERVATIONS_TOTAL: &str = "innkeep_reservations_total";

/// Counter: bookings rejected due to an overlapping reservation.
pub const RESERVATION_CONFLICTS_TOTAL: &str = "innkeep_reservation_conflicts_total";

/// Counter: availability queries served.
pub const AVAILABILITY_QUERIES_TOTAL: &str = "innkeep_availability_queries_total";
