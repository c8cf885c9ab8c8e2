//! Request DTOs for availability API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Request to find free rooms for a stay
#[derive(Debug, Deserialize)]
pub struct CheckAvailabilityRequest {
    pub hotel_id: i64,
    #[serde(default)]
    pub room_type_id: Option<i64>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

/// Query parameters for the occupancy calendar
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub hotel_id: i64,
    #[serde(default)]
    pub room_type_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Query parameters for the single-room conflict check
#[derive(Debug, Deserialize)]
pub struct RoomAvailabilityQuery {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    /// Set when editing an existing reservation in place
    #[serde(default)]
    pub exclude_reservation_id: Option<i64>,
}

/// Query parameters for the conflicting-reservations lookup
#[derive(Debug, Deserialize)]
pub struct OverlapQuery {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}
