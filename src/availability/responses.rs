//! Response DTOs for availability API endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::models::{Reservation, Room};

/// A free room offered to the caller
#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub id: i64,
    pub room_number: String,
    pub room_type_name: String,
}

impl From<Room> for RoomSummary {
    fn from(room: Room) -> Self {
        RoomSummary {
            id: room.id,
            room_number: room.room_number,
            room_type_name: room.room_type_name,
        }
    }
}

/// Response for the check-availability endpoint
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub count: usize,
    pub rooms: Vec<RoomSummary>,
    /// Filled only when nothing matched and a room type was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<BTreeMap<String, AlternativeRoomType>>,
}

/// A room in an alternate-room-type suggestion
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRoom {
    pub id: i64,
    pub room_number: String,
}

/// Alternate room type with up to three free rooms
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeRoomType {
    pub room_type_id: i64,
    pub room_type_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_rate: Decimal,
    pub available_count: usize,
    pub rooms: Vec<AlternativeRoom>,
}

/// One day of the occupancy calendar
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub total_rooms: i64,
    pub occupied: i64,
    pub available: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub occupancy_rate: Decimal,
}

/// Response for the availability-calendar endpoint
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub calendar: BTreeMap<NaiveDate, CalendarDay>,
}

/// Response for the single-room conflict check
#[derive(Debug, Serialize)]
pub struct RoomAvailabilityResponse {
    pub room_id: i64,
    pub available: bool,
}

/// A conflicting reservation shown to staff
#[derive(Debug, Clone, Serialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub confirmation_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub adults: i32,
    pub children: i32,
}

impl From<Reservation> for ReservationSummary {
    fn from(r: Reservation) -> Self {
        ReservationSummary {
            id: r.id,
            confirmation_number: r.confirmation_number,
            check_in_date: r.check_in_date,
            check_out_date: r.check_out_date,
            status: r.status,
            adults: r.adults,
            children: r.children,
        }
    }
}

/// Response for the overlapping-reservations endpoint
#[derive(Debug, Serialize)]
pub struct OverlappingReservationsResponse {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub reservations: Vec<ReservationSummary>,
}
