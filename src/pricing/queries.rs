//! Database queries for the rate catalog.
//!
//! All catalog access is batched per request: one query per table for the
//! whole stay, never one query per night.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::AppError;

use super::models::{Discount, RatePlan, RoomRate, Season, YieldRule};

/// Fetch an active rate plan by id
pub async fn get_active_rate_plan(
    pool: &PgPool,
    rate_plan_id: i64,
) -> Result<Option<RatePlan>, AppError> {
    let plan = sqlx::query_as::<_, RatePlan>(
        r#"
        SELECT id, property_id, name, code, rate_type, is_refundable, is_active
        FROM rates_rateplan
        WHERE id = $1
          AND is_active = true
        "#,
    )
    .bind(rate_plan_id)
    .fetch_optional(pool)
    .await?;

    Ok(plan)
}

/// Fetch all active rate plans for a property, in catalog order
pub async fn get_active_rate_plans(
    pool: &PgPool,
    property_id: i64,
) -> Result<Vec<RatePlan>, AppError> {
    let plans = sqlx::query_as::<_, RatePlan>(
        r#"
        SELECT id, property_id, name, code, rate_type, is_refundable, is_active
        FROM rates_rateplan
        WHERE property_id = $1
          AND is_active = true
        ORDER BY id
        "#,
    )
    .bind(property_id)
    .fetch_all(pool)
    .await?;

    Ok(plans)
}

/// Fetch active seasons overlapping the half-open stay range `[start, end)`.
///
/// Season bounds are inclusive, so a season overlaps the stay when it starts
/// before checkout and ends on or after check-in.
pub async fn seasons_overlapping(
    pool: &PgPool,
    property_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<Season>, AppError> {
    let seasons = sqlx::query_as::<_, Season>(
        r#"
        SELECT id, property_id, name, start_date, end_date, priority, is_active
        FROM rates_season
        WHERE property_id = $1
          AND is_active = true
          AND start_date < $3
          AND end_date >= $2
        ORDER BY priority DESC, id
        "#,
    )
    .bind(property_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(seasons)
}

/// Fetch every active rate row for a (rate plan, room type) pair.
///
/// Includes the season-null base row and all seasonal rows; season
/// resolution picks between them per night.
pub async fn room_rates_for(
    pool: &PgPool,
    rate_plan_id: i64,
    room_type_id: i64,
) -> Result<Vec<RoomRate>, AppError> {
    let rates = sqlx::query_as::<_, RoomRate>(
        r#"
        SELECT id, rate_plan_id, room_type_id, season_id,
               single_rate, double_rate, extra_adult, extra_child, is_active
        FROM rates_roomrate
        WHERE rate_plan_id = $1
          AND room_type_id = $2
          AND is_active = true
        "#,
    )
    .bind(rate_plan_id)
    .bind(room_type_id)
    .fetch_all(pool)
    .await?;

    Ok(rates)
}

/// Fetch active yield rules for a property in evaluation order
pub async fn active_yield_rules(
    pool: &PgPool,
    property_id: i64,
) -> Result<Vec<YieldRule>, AppError> {
    let rules = sqlx::query_as::<_, YieldRule>(
        r#"
        SELECT id, property_id, name, trigger_type,
               min_threshold, max_threshold, adjustment_percent, priority, is_active
        FROM rates_yieldrule
        WHERE property_id = $1
          AND is_active = true
        ORDER BY priority DESC, id
        "#,
    )
    .bind(property_id)
    .fetch_all(pool)
    .await?;

    Ok(rules)
}

/// Fetch active discounts whose validity window covers the check-in date
pub async fn discounts_valid_on(
    pool: &PgPool,
    property_id: i64,
    check_in_date: NaiveDate,
) -> Result<Vec<Discount>, AppError> {
    let discounts = sqlx::query_as::<_, Discount>(
        r#"
        SELECT id, property_id, name, code, discount_type, value,
               valid_from, valid_to, min_nights, is_active
        FROM rates_discount
        WHERE property_id = $1
          AND is_active = true
          AND valid_from <= $2
          AND valid_to >= $2
        ORDER BY id
        "#,
    )
    .bind(property_id)
    .bind(check_in_date)
    .fetch_all(pool)
    .await?;

    Ok(discounts)
}
