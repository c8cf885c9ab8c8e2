//! Availability service functions.
//!
//! Database access loads rooms and occupancy in single batched queries; the
//! conflict, selection and calendar logic is pure and tested in memory.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use crate::error::AppError;
use crate::pricing::round_money;

use super::models::{OccupancyRecord, Reservation, Room};
use super::queries;
use super::responses::{AlternativeRoom, AlternativeRoomType, CalendarDay};

/// Maximum bookable stay length in nights (policy constant)
pub const MAX_STAY_DAYS: i64 = 365;

/// Booking-date policy failures, surfaced as 400s with the reason string
#[derive(Debug, Clone, thiserror::Error)]
pub enum DateValidationError {
    #[error("Check-in date cannot be in the past")]
    CheckInPast,

    #[error("Check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,

    #[error("Maximum stay is {} nights", MAX_STAY_DAYS)]
    MaxStayExceeded,
}

/// Validate a requested booking date range against policy.
///
/// Same-day check-in is allowed; the past is not. `today` is passed in so
/// callers and tests share one clock.
pub fn validate_booking_dates(
    today: NaiveDate,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<(), DateValidationError> {
    if check_in < today {
        return Err(DateValidationError::CheckInPast);
    }
    if check_out <= check_in {
        return Err(DateValidationError::CheckOutNotAfterCheckIn);
    }
    if (check_out - check_in).num_days() > MAX_STAY_DAYS {
        return Err(DateValidationError::MaxStayExceeded);
    }
    Ok(())
}

/// Check if a single room is free for `[check_in, check_out)`.
///
/// Advisory only: the PMS re-checks transactionally when the booking
/// commits.
pub async fn check_availability(
    pool: &PgPool,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    exclude_reservation_id: Option<i64>,
) -> Result<bool, AppError> {
    let conflict = queries::has_conflicting_occupancy(
        pool,
        room_id,
        check_in,
        check_out,
        exclude_reservation_id,
    )
    .await?;
    Ok(!conflict)
}

/// Find up to `count` free rooms for a stay.
///
/// Candidates are active vacant-clean rooms, optionally narrowed to one room
/// type. Selection keeps the first `count` free rooms in room-number order;
/// it does not rank them.
pub async fn get_available_rooms(
    pool: &PgPool,
    hotel_id: i64,
    room_type_id: Option<i64>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    count: usize,
) -> Result<Vec<Room>, AppError> {
    let candidates = queries::bookable_rooms(pool, hotel_id, room_type_id).await?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let room_ids: Vec<i64> = candidates.iter().map(|r| r.id).collect();
    let occupancy = queries::occupancy_for_rooms(pool, &room_ids, check_in, check_out).await?;

    Ok(select_free_rooms(
        candidates, &occupancy, check_in, check_out, count,
    ))
}

/// Pick the first `count` rooms with no overlapping occupancy
pub fn select_free_rooms(
    candidates: Vec<Room>,
    occupancy: &[OccupancyRecord],
    check_in: NaiveDate,
    check_out: NaiveDate,
    count: usize,
) -> Vec<Room> {
    let occupied: HashSet<i64> = occupancy
        .iter()
        .filter(|rec| rec.overlaps(check_in, check_out))
        .map(|rec| rec.room_id)
        .collect();

    candidates
        .into_iter()
        .filter(|room| !occupied.contains(&room.id))
        .take(count)
        .collect()
}

/// Build the per-date occupancy calendar for `[start_date, end_date)`
pub async fn get_availability_calendar(
    pool: &PgPool,
    hotel_id: i64,
    room_type_id: Option<i64>,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<BTreeMap<NaiveDate, CalendarDay>, AppError> {
    let rooms = queries::rooms_in_service(pool, hotel_id, room_type_id).await?;
    let room_ids: Vec<i64> = rooms.iter().map(|r| r.id).collect();

    let occupancy = if room_ids.is_empty() {
        Vec::new()
    } else {
        queries::occupancy_for_rooms(pool, &room_ids, start_date, end_date).await?
    };

    Ok(build_calendar(
        rooms.len() as i64,
        &occupancy,
        start_date,
        end_date,
    ))
}

/// Count distinct occupied rooms per night and derive occupancy rates.
///
/// `occupancy_rate` is a percentage rounded to 2 decimals with banker's
/// rounding; zero when the property has no rooms in the selection.
pub fn build_calendar(
    total_rooms: i64,
    occupancy: &[OccupancyRecord],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> BTreeMap<NaiveDate, CalendarDay> {
    let mut calendar = BTreeMap::new();
    let mut current_date = start_date;

    while current_date < end_date {
        let next_date = current_date + Duration::days(1);

        let occupied_rooms: HashSet<i64> = occupancy
            .iter()
            .filter(|rec| rec.overlaps(current_date, next_date))
            .map(|rec| rec.room_id)
            .collect();
        let occupied = occupied_rooms.len() as i64;

        let occupancy_rate = if total_rooms > 0 {
            round_money(
                Decimal::from(occupied) * dec!(100) / Decimal::from(total_rooms),
                2,
            )
        } else {
            Decimal::ZERO
        };

        calendar.insert(
            current_date,
            CalendarDay {
                date: current_date,
                total_rooms,
                occupied,
                available: total_rooms - occupied,
                occupancy_rate,
            },
        );

        current_date = next_date;
    }

    calendar
}

/// Fetch the distinct reservations conflicting with a room's date range, for
/// staff resolving conflicts
pub async fn get_overlapping_reservations(
    pool: &PgPool,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<Reservation>, AppError> {
    queries::overlapping_reservations(pool, room_id, check_in, check_out).await
}

/// Suggest free rooms in other room types when the requested one is full.
///
/// Every other active room type of the property is probed for up to three
/// free rooms; types with none are omitted.
pub async fn suggest_alternative_rooms(
    pool: &PgPool,
    hotel_id: i64,
    room_type_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<BTreeMap<String, AlternativeRoomType>, AppError> {
    let mut suggestions = BTreeMap::new();

    for room_type in queries::other_active_room_types(pool, hotel_id, room_type_id).await? {
        let available =
            get_available_rooms(pool, hotel_id, Some(room_type.id), check_in, check_out, 3)
                .await?;
        if available.is_empty() {
            continue;
        }

        suggestions.insert(
            room_type.name.clone(),
            AlternativeRoomType {
                room_type_id: room_type.id,
                room_type_name: room_type.name,
                base_rate: room_type.base_rate,
                available_count: available.len(),
                rooms: available
                    .into_iter()
                    .map(|room| AlternativeRoom {
                        id: room.id,
                        room_number: room.room_number,
                    })
                    .collect(),
            },
        );
    }

    Ok(suggestions)
}

/// Today's date in UTC, the clock used for booking-date policy
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(id: i64) -> Room {
        Room {
            id,
            hotel_id: 1,
            room_type_id: 1,
            room_type_name: "Standard Room".to_string(),
            room_number: format!("{}", 100 + id),
            status: "VC".to_string(),
            is_active: true,
        }
    }

    fn occupancy(room_id: i64, start: NaiveDate, end: NaiveDate) -> OccupancyRecord {
        OccupancyRecord {
            room_id,
            reservation_id: room_id * 10,
            check_in_date: start,
            check_out_date: end,
        }
    }

    // ==================== validate_booking_dates tests ====================

    #[test]
    fn test_validate_rejects_past_check_in() {
        let today = date(2026, 5, 10);
        let result = validate_booking_dates(today, date(2026, 5, 9), date(2026, 5, 12));
        assert!(matches!(result, Err(DateValidationError::CheckInPast)));
    }

    #[test]
    fn test_validate_rejects_zero_night_stay() {
        let today = date(2026, 5, 10);
        let result = validate_booking_dates(today, date(2026, 5, 12), date(2026, 5, 12));
        assert!(matches!(
            result,
            Err(DateValidationError::CheckOutNotAfterCheckIn)
        ));
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let today = date(2026, 5, 10);
        let result = validate_booking_dates(today, date(2026, 5, 14), date(2026, 5, 12));
        assert!(matches!(
            result,
            Err(DateValidationError::CheckOutNotAfterCheckIn)
        ));
    }

    #[test]
    fn test_validate_accepts_same_day_check_in() {
        let today = date(2026, 5, 10);
        assert!(validate_booking_dates(today, today, today + Duration::days(1)).is_ok());
    }

    #[test]
    fn test_validate_max_stay_boundary() {
        let today = date(2026, 5, 10);
        let check_in = date(2026, 6, 1);

        let at_limit = check_in + Duration::days(MAX_STAY_DAYS);
        assert!(validate_booking_dates(today, check_in, at_limit).is_ok());

        let over_limit = check_in + Duration::days(MAX_STAY_DAYS + 1);
        assert!(matches!(
            validate_booking_dates(today, check_in, over_limit),
            Err(DateValidationError::MaxStayExceeded)
        ));
    }

    // ==================== select_free_rooms tests ====================

    #[test]
    fn test_select_free_rooms_excludes_conflicts() {
        let candidates = vec![room(1), room(2)];
        let records = vec![occupancy(1, date(2026, 4, 10), date(2026, 4, 13))];

        let free = select_free_rooms(
            candidates,
            &records,
            date(2026, 4, 11),
            date(2026, 4, 14),
            5,
        );
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].id, 2);
    }

    #[test]
    fn test_select_free_rooms_keeps_disjoint_stays() {
        let candidates = vec![room(1)];
        let records = vec![occupancy(1, date(2026, 4, 10), date(2026, 4, 13))];

        // Checkout day is free for the next arrival
        let free = select_free_rooms(
            candidates,
            &records,
            date(2026, 4, 13),
            date(2026, 4, 15),
            5,
        );
        assert_eq!(free.len(), 1);
    }

    #[test]
    fn test_select_free_rooms_short_circuits_at_count() {
        let candidates = vec![room(1), room(2), room(3), room(4)];
        let free = select_free_rooms(candidates, &[], date(2026, 4, 1), date(2026, 4, 3), 2);
        // First two in catalog order, no ranking
        assert_eq!(free.len(), 2);
        assert_eq!(free[0].id, 1);
        assert_eq!(free[1].id, 2);
    }

    // ==================== build_calendar tests ====================

    #[test]
    fn test_calendar_has_one_entry_per_night() {
        let start = date(2026, 4, 1);
        let end = date(2026, 4, 8);
        let calendar = build_calendar(10, &[], start, end);

        assert_eq!(calendar.len(), 7);
        assert!(calendar.contains_key(&start));
        assert!(calendar.contains_key(&date(2026, 4, 7)));
        assert!(!calendar.contains_key(&end));
        for day in calendar.values() {
            assert_eq!(day.total_rooms, 10);
            assert_eq!(day.occupied, 0);
            assert_eq!(day.available, 10);
            assert_eq!(day.occupancy_rate, Decimal::ZERO);
        }
    }

    #[test]
    fn test_calendar_counts_occupied_nights() {
        let start = date(2026, 4, 1);
        let end = date(2026, 4, 5);
        // Room 1 occupied nights 1-2, room 2 occupied night 2 only
        let records = vec![
            occupancy(1, date(2026, 4, 1), date(2026, 4, 3)),
            occupancy(2, date(2026, 4, 2), date(2026, 4, 3)),
        ];
        let calendar = build_calendar(4, &records, start, end);

        assert_eq!(calendar[&date(2026, 4, 1)].occupied, 1);
        assert_eq!(calendar[&date(2026, 4, 2)].occupied, 2);
        assert_eq!(calendar[&date(2026, 4, 3)].occupied, 0);
        assert_eq!(calendar[&date(2026, 4, 2)].available, 2);
        assert_eq!(calendar[&date(2026, 4, 2)].occupancy_rate, dec!(50.00));
    }

    #[test]
    fn test_calendar_counts_rooms_not_records() {
        let start = date(2026, 4, 1);
        let end = date(2026, 4, 2);
        // Two records for the same room on the same night count once
        let records = vec![
            occupancy(1, date(2026, 4, 1), date(2026, 4, 2)),
            OccupancyRecord {
                reservation_id: 99,
                ..occupancy(1, date(2026, 4, 1), date(2026, 4, 3))
            },
        ];
        let calendar = build_calendar(2, &records, start, end);
        assert_eq!(calendar[&start].occupied, 1);
    }

    #[test]
    fn test_calendar_occupancy_rate_rounds_to_two_decimals() {
        let start = date(2026, 4, 1);
        let end = date(2026, 4, 2);
        let records = vec![occupancy(1, start, end)];
        let calendar = build_calendar(3, &records, start, end);
        // 1/3 * 100 = 33.333... -> 33.33
        assert_eq!(calendar[&start].occupancy_rate, dec!(33.33));
    }

    #[test]
    fn test_calendar_with_no_rooms_has_zero_rate() {
        let start = date(2026, 4, 1);
        let calendar = build_calendar(0, &[], start, date(2026, 4, 3));
        for day in calendar.values() {
            assert_eq!(day.occupancy_rate, Decimal::ZERO);
            assert_eq!(day.available, 0);
        }
    }
}
