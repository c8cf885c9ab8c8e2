//! Database models for rooms and reservation occupancy.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Bookable room from rooms_room, joined to its room type name.
///
/// Status `VC` (vacant clean) is the only operational status the engine
/// offers for new bookings.
#[derive(Debug, Clone, FromRow)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
    pub room_type_name: String,
    pub room_number: String,
    pub status: String,
    pub is_active: bool,
}

/// Room category from rooms_roomtype
#[derive(Debug, Clone, FromRow)]
pub struct RoomType {
    pub id: i64,
    pub hotel_id: i64,
    pub name: String,
    pub code: String,
    pub max_occupancy: i32,
    pub base_rate: Decimal,
    pub is_active: bool,
}

/// Reservation header from reservations_reservation
#[derive(Debug, Clone, FromRow)]
pub struct Reservation {
    pub id: i64,
    pub hotel_id: i64,
    pub confirmation_number: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: String,
    pub adults: i32,
    pub children: i32,
}

/// A room assignment joined to its reservation's stay dates.
///
/// Queries only return records for CONFIRMED/CHECKED_IN reservations; other
/// statuses never block a room.
#[derive(Debug, Clone, FromRow)]
pub struct OccupancyRecord {
    pub room_id: i64,
    pub reservation_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

impl OccupancyRecord {
    /// Half-open overlap: the night of check-out itself is free.
    /// Two stays conflict iff `existing.start < new.end && existing.end > new.start`.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        self.check_in_date < check_out && self.check_out_date > check_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stay(start: NaiveDate, end: NaiveDate) -> OccupancyRecord {
        OccupancyRecord {
            room_id: 1,
            reservation_id: 1,
            check_in_date: start,
            check_out_date: end,
        }
    }

    #[test]
    fn test_overlap_inside_existing_stay() {
        // Existing [10, 13) conflicts with any range touching a booked night
        let existing = stay(date(2026, 4, 10), date(2026, 4, 13));
        assert!(existing.overlaps(date(2026, 4, 11), date(2026, 4, 12)));
        assert!(existing.overlaps(date(2026, 4, 9), date(2026, 4, 11)));
        assert!(existing.overlaps(date(2026, 4, 12), date(2026, 4, 15)));
        assert!(existing.overlaps(date(2026, 4, 9), date(2026, 4, 15)));
    }

    #[test]
    fn test_checkout_day_does_not_conflict() {
        // Back-to-back stays share a turnover day
        let existing = stay(date(2026, 4, 10), date(2026, 4, 13));
        assert!(!existing.overlaps(date(2026, 4, 13), date(2026, 4, 15)));
        assert!(!existing.overlaps(date(2026, 4, 8), date(2026, 4, 10)));
    }

    #[test]
    fn test_disjoint_ranges_do_not_conflict() {
        let existing = stay(date(2026, 4, 10), date(2026, 4, 13));
        assert!(!existing.overlaps(date(2026, 4, 20), date(2026, 4, 22)));
        assert!(!existing.overlaps(date(2026, 4, 1), date(2026, 4, 5)));
    }
}
