//! Pricing route handlers

use axum::{extract::State, routing::post, Json, Router};

use crate::error::AppError;
use crate::AppState;

use super::requests::{CalculatePriceRequest, CompareRatesRequest};
use super::responses::{CompareRatesResponse, PricingBreakdown};
use super::services;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate-price", post(calculate_price))
        .route("/compare-rates", post(compare_rates))
}

/// Price a stay for a (room type, rate plan) pair
async fn calculate_price(
    State(state): State<AppState>,
    Json(req): Json<CalculatePriceRequest>,
) -> Result<Json<PricingBreakdown>, AppError> {
    let pricing = services::calculate_room_rate(
        &state.db,
        req.room_type_id,
        req.rate_plan_id,
        req.check_in_date,
        req.check_out_date,
        req.adults,
        req.children,
    )
    .await?;

    Ok(Json(pricing))
}

/// Compare all active rate plans of a property for a stay
async fn compare_rates(
    State(state): State<AppState>,
    Json(req): Json<CompareRatesRequest>,
) -> Result<Json<CompareRatesResponse>, AppError> {
    let rate_plans = services::get_rate_comparison(
        &state.db,
        req.room_type_id,
        req.check_in_date,
        req.check_out_date,
        req.property_id,
    )
    .await?;

    Ok(Json(CompareRatesResponse {
        room_type_id: req.room_type_id,
        check_in_date: req.check_in_date,
        check_out_date: req.check_out_date,
        rate_plans,
    }))
}
