//! Pricing service functions with database access.
//!
//! Load the catalog snapshot for a stay, then hand off to the pure
//! calculators. All monetary math lives in `calculators`.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;

use crate::error::AppError;

use super::calculators::{self, RateContext};
use super::models::RatePlan;
use super::queries;
use super::responses::{PricingBreakdown, RateComparison};

/// Pricing failure taxonomy.
///
/// Each failure is scoped to a single quoting request and surfaced to the
/// PMS as a structured JSON error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid date range")]
    InvalidDateRange,

    #[error("Rate plan not found")]
    RatePlanNotFound,

    #[error("No rate found for date {date}")]
    RateNotFound { date: NaiveDate },
}

/// Calculate the total room rate for a stay.
///
/// Fails with `InvalidDateRange` for zero or negative night counts,
/// `RatePlanNotFound` for missing/inactive plans, and `RateNotFound` (with
/// the offending date) when the rate table has a gap.
pub async fn calculate_room_rate(
    pool: &PgPool,
    room_type_id: i64,
    rate_plan_id: i64,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    adults: u32,
    children: u32,
) -> Result<PricingBreakdown, AppError> {
    let nights = (check_out_date - check_in_date).num_days();
    if nights <= 0 {
        return Err(PricingError::InvalidDateRange.into());
    }

    let rate_plan = queries::get_active_rate_plan(pool, rate_plan_id)
        .await?
        .ok_or(PricingError::RatePlanNotFound)?;

    let ctx = load_rate_context(pool, rate_plan, room_type_id, check_in_date, check_out_date)
        .await?;

    let today = Utc::now().date_naive();
    let quote =
        calculators::calculate_stay_quote(&ctx, check_in_date, check_out_date, adults, children, today)?;
    Ok(quote)
}

/// Compare rates across every active rate plan of a property.
///
/// Plans that fail to price (e.g. a rate-table gap for the stay's dates) are
/// dropped from the comparison rather than failing the whole request.
pub async fn get_rate_comparison(
    pool: &PgPool,
    room_type_id: i64,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    property_id: i64,
) -> Result<Vec<RateComparison>, AppError> {
    let plans = queries::get_active_rate_plans(pool, property_id).await?;
    let today = Utc::now().date_naive();

    let mut quoted = Vec::with_capacity(plans.len());
    for plan in plans {
        let plan_id = plan.id;
        let ctx =
            load_rate_context(pool, plan, room_type_id, check_in_date, check_out_date).await?;
        match calculators::calculate_stay_quote(&ctx, check_in_date, check_out_date, 1, 0, today) {
            Ok(quote) => quoted.push((ctx.rate_plan, quote)),
            Err(err) => {
                tracing::debug!(rate_plan_id = plan_id, error = %err, "rate plan skipped in comparison");
            }
        }
    }

    Ok(calculators::rank_comparisons(quoted))
}

/// Load the catalog snapshot for one stay of one (rate plan, room type) pair
async fn load_rate_context(
    pool: &PgPool,
    rate_plan: RatePlan,
    room_type_id: i64,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
) -> Result<RateContext, AppError> {
    let property_id = rate_plan.property_id;
    let seasons =
        queries::seasons_overlapping(pool, property_id, check_in_date, check_out_date).await?;
    let rates = queries::room_rates_for(pool, rate_plan.id, room_type_id).await?;
    let yield_rules = queries::active_yield_rules(pool, property_id).await?;
    let discounts = queries::discounts_valid_on(pool, property_id, check_in_date).await?;

    Ok(RateContext {
        rate_plan,
        seasons,
        rates,
        yield_rules,
        discounts,
    })
}
