//! Database queries for room availability.
//!
//! Occupancy is fetched with one range query per request over the candidate
//! room set, then filtered in memory - no per-room probing.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::AppError;

use super::models::{OccupancyRecord, Reservation, Room, RoomType};

/// Check whether any blocking reservation occupies a room in `[check_in, check_out)`.
///
/// `exclude_reservation_id` lets in-place edits ignore their own reservation.
pub async fn has_conflicting_occupancy(
    pool: &PgPool,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
    exclude_reservation_id: Option<i64>,
) -> Result<bool, AppError> {
    let conflict = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM reservations_reservationroom rr
            JOIN reservations_reservation r ON r.id = rr.reservation_id
            WHERE rr.room_id = $1
              AND r.status IN ('CONFIRMED', 'CHECKED_IN')
              AND r.check_in_date < $3
              AND r.check_out_date > $2
              AND ($4::bigint IS NULL OR r.id <> $4)
        )
        "#,
    )
    .bind(room_id)
    .bind(check_in)
    .bind(check_out)
    .bind(exclude_reservation_id)
    .fetch_one(pool)
    .await?;

    Ok(conflict)
}

/// Fetch active vacant-clean rooms for a property, in room-number order
pub async fn bookable_rooms(
    pool: &PgPool,
    hotel_id: i64,
    room_type_id: Option<i64>,
) -> Result<Vec<Room>, AppError> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT rm.id, rm.hotel_id, rm.room_type_id, rt.name AS room_type_name,
               rm.room_number, rm.status, rm.is_active
        FROM rooms_room rm
        JOIN rooms_roomtype rt ON rt.id = rm.room_type_id
        WHERE rm.hotel_id = $1
          AND rm.is_active = true
          AND rm.status = 'VC'
          AND ($2::bigint IS NULL OR rm.room_type_id = $2)
        ORDER BY rm.room_number
        "#,
    )
    .bind(hotel_id)
    .bind(room_type_id)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Fetch all active rooms for a property (any operational status), for
/// calendar totals
pub async fn rooms_in_service(
    pool: &PgPool,
    hotel_id: i64,
    room_type_id: Option<i64>,
) -> Result<Vec<Room>, AppError> {
    let rooms = sqlx::query_as::<_, Room>(
        r#"
        SELECT rm.id, rm.hotel_id, rm.room_type_id, rt.name AS room_type_name,
               rm.room_number, rm.status, rm.is_active
        FROM rooms_room rm
        JOIN rooms_roomtype rt ON rt.id = rm.room_type_id
        WHERE rm.hotel_id = $1
          AND rm.is_active = true
          AND ($2::bigint IS NULL OR rm.room_type_id = $2)
        ORDER BY rm.room_number
        "#,
    )
    .bind(hotel_id)
    .bind(room_type_id)
    .fetch_all(pool)
    .await?;

    Ok(rooms)
}

/// Fetch blocking occupancy records overlapping `[start, end)` for a room set
pub async fn occupancy_for_rooms(
    pool: &PgPool,
    room_ids: &[i64],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<OccupancyRecord>, AppError> {
    let records = sqlx::query_as::<_, OccupancyRecord>(
        r#"
        SELECT rr.room_id, rr.reservation_id, r.check_in_date, r.check_out_date
        FROM reservations_reservationroom rr
        JOIN reservations_reservation r ON r.id = rr.reservation_id
        WHERE rr.room_id = ANY($1)
          AND r.status IN ('CONFIRMED', 'CHECKED_IN')
          AND r.check_in_date < $3
          AND r.check_out_date > $2
        "#,
    )
    .bind(room_ids)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

/// Fetch the distinct blocking reservations overlapping a room's date range
pub async fn overlapping_reservations(
    pool: &PgPool,
    room_id: i64,
    check_in: NaiveDate,
    check_out: NaiveDate,
) -> Result<Vec<Reservation>, AppError> {
    let reservations = sqlx::query_as::<_, Reservation>(
        r#"
        SELECT DISTINCT r.id, r.hotel_id, r.confirmation_number,
               r.check_in_date, r.check_out_date, r.status, r.adults, r.children
        FROM reservations_reservation r
        JOIN reservations_reservationroom rr ON rr.reservation_id = r.id
        WHERE rr.room_id = $1
          AND r.status IN ('CONFIRMED', 'CHECKED_IN')
          AND r.check_in_date < $3
          AND r.check_out_date > $2
        ORDER BY r.check_in_date, r.id
        "#,
    )
    .bind(room_id)
    .bind(check_in)
    .bind(check_out)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

/// Fetch the other active room types of a property (for alternates)
pub async fn other_active_room_types(
    pool: &PgPool,
    hotel_id: i64,
    exclude_room_type_id: i64,
) -> Result<Vec<RoomType>, AppError> {
    let room_types = sqlx::query_as::<_, RoomType>(
        r#"
        SELECT id, hotel_id, name, code, max_occupancy, base_rate, is_active
        FROM rooms_roomtype
        WHERE hotel_id = $1
          AND is_active = true
          AND id <> $2
        ORDER BY sort_order, name
        "#,
    )
    .bind(hotel_id)
    .bind(exclude_room_type_id)
    .fetch_all(pool)
    .await?;

    Ok(room_types)
}
