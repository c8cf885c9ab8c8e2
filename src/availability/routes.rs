//! Availability route handlers

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::AppError;
use crate::AppState;

use super::requests::{CalendarQuery, CheckAvailabilityRequest, OverlapQuery, RoomAvailabilityQuery};
use super::responses::{
    AvailabilityResponse, CalendarResponse, OverlappingReservationsResponse,
    RoomAvailabilityResponse, RoomSummary,
};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/check-availability", post(check_availability))
        .route("/room-availability", get(room_availability))
        .route("/availability-calendar", get(availability_calendar))
        .route("/overlapping-reservations", get(overlapping_reservations))
}

/// Conflict check for one room, used by reservation create/edit flows
async fn room_availability(
    State(state): State<AppState>,
    Query(query): Query<RoomAvailabilityQuery>,
) -> Result<Json<RoomAvailabilityResponse>, AppError> {
    let available = services::check_availability(
        &state.db,
        query.room_id,
        query.check_in_date,
        query.check_out_date,
        query.exclude_reservation_id,
    )
    .await?;

    Ok(Json(RoomAvailabilityResponse {
        room_id: query.room_id,
        available,
    }))
}

/// Find free rooms for a stay, with alternates when the requested type is full
async fn check_availability(
    State(state): State<AppState>,
    Json(req): Json<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    services::validate_booking_dates(services::today(), req.check_in_date, req.check_out_date)?;

    let rooms = services::get_available_rooms(
        &state.db,
        req.hotel_id,
        req.room_type_id,
        req.check_in_date,
        req.check_out_date,
        req.count,
    )
    .await?;

    let alternatives = match (rooms.is_empty(), req.room_type_id) {
        (true, Some(room_type_id)) => Some(
            services::suggest_alternative_rooms(
                &state.db,
                req.hotel_id,
                room_type_id,
                req.check_in_date,
                req.check_out_date,
            )
            .await?,
        ),
        _ => None,
    };

    let rooms: Vec<RoomSummary> = rooms.into_iter().map(RoomSummary::from).collect();
    Ok(Json(AvailabilityResponse {
        available: !rooms.is_empty(),
        count: rooms.len(),
        rooms,
        alternatives,
    }))
}

/// Per-date occupancy calendar for a property
async fn availability_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let calendar = services::get_availability_calendar(
        &state.db,
        query.hotel_id,
        query.room_type_id,
        query.start_date,
        query.end_date,
    )
    .await?;

    Ok(Json(CalendarResponse {
        start_date: query.start_date,
        end_date: query.end_date,
        calendar,
    }))
}

/// Reservations conflicting with a room's date range, for staff display
async fn overlapping_reservations(
    State(state): State<AppState>,
    Query(query): Query<OverlapQuery>,
) -> Result<Json<OverlappingReservationsResponse>, AppError> {
    let reservations = services::get_overlapping_reservations(
        &state.db,
        query.room_id,
        query.check_in_date,
        query.check_out_date,
    )
    .await?;

    Ok(Json(OverlappingReservationsResponse {
        room_id: query.room_id,
        check_in_date: query.check_in_date,
        check_out_date: query.check_out_date,
        reservations: reservations
            .into_iter()
            .map(|r| r.into())
            .collect(),
    }))
}
