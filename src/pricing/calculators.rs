//! Core pricing calculation functions.
//!
//! Pure functions for rate math - no database access. The catalog rows for a
//! stay are loaded once into a [`RateContext`] and every computation here
//! works over that snapshot.

use std::cmp::Reverse;

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{Discount, RatePlan, RoomRate, Season, YieldRule};
use super::responses::{
    DailyRate, DiscountDetail, PackageDetail, PricingBreakdown, RateComparison,
};
use super::services::PricingError;

/// Tax rate applied to the discounted subtotal.
///
/// Fixed at 15% for parity with the PMS rate configuration. TODO: read the
/// tax rate from properties_property once the PMS exposes it per property.
pub const TAX_RATE: Decimal = dec!(0.15);

/// Catalog snapshot for pricing one stay of one (rate plan, room type) pair.
///
/// `rates` holds every active rate row for the pair; `seasons` every active
/// season overlapping the stay. Loading happens once per request, not once
/// per night.
#[derive(Debug, Clone)]
pub struct RateContext {
    pub rate_plan: RatePlan,
    pub seasons: Vec<Season>,
    pub rates: Vec<RoomRate>,
    pub yield_rules: Vec<YieldRule>,
    pub discounts: Vec<Discount>,
}

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Matches Python's `round()`, which the PMS uses for occupancy rates.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hotelops_engine::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Resolve the season that applies to a date.
///
/// Highest priority wins among active seasons containing the date. Ties on
/// priority break to the narrowest date range, then the lowest id, so the
/// result never depends on store ordering. Returns None when no season
/// covers the date (the base "Standard" rate row applies).
pub fn resolve_season(seasons: &[Season], date: NaiveDate) -> Option<&Season> {
    seasons
        .iter()
        .filter(|s| s.is_active && s.contains(date))
        .min_by_key(|s| (Reverse(s.priority), s.span_days(), s.id))
}

/// Nightly base amount for a rate row and party size.
///
/// One adult pays the single rate, two the double rate; each further adult
/// adds the extra-adult increment on top of the double rate. Children add
/// the extra-child increment each.
pub fn nightly_base(rate: &RoomRate, adults: u32, children: u32) -> Decimal {
    let mut nightly = if adults <= 1 {
        rate.single_rate
    } else if adults == 2 {
        rate.double_rate
    } else {
        rate.double_rate + rate.extra_adult * Decimal::from(adults - 2)
    };

    if children > 0 {
        nightly += rate.extra_child * Decimal::from(children);
    }

    nightly
}

/// Apply yield management rules to a nightly rate.
///
/// Qualifying rules compose multiplicatively: each multiplies the running
/// rate by `1 + adjustment_percent/100`. Rules are evaluated by priority
/// (descending) then id, which keeps the gating deterministic even though
/// multiplication itself commutes. No floor is enforced on the result.
///
/// - OCCUPANCY rules apply unconditionally (occupancy gating is not wired
///   up yet; see the PMS yield roadmap).
/// - DAY_AHEAD rules apply when the lead time `date - today` falls within
///   `[min_threshold, max_threshold]`; a missing max is unbounded above.
/// - DEMAND rules are reserved and do nothing.
pub fn apply_yield_rules(
    rules: &[YieldRule],
    date: NaiveDate,
    today: NaiveDate,
    base_rate: Decimal,
) -> Decimal {
    let mut ordered: Vec<&YieldRule> = rules.iter().filter(|r| r.is_active).collect();
    ordered.sort_by_key(|r| (Reverse(r.priority), r.id));

    let mut rate = base_rate;
    for rule in ordered {
        match rule.trigger_type.as_str() {
            "OCCUPANCY" => {
                rate *= Decimal::ONE + rule.adjustment_percent / dec!(100);
            }
            "DAY_AHEAD" => {
                let days_until = (date - today).num_days();
                let above_min = days_until >= i64::from(rule.min_threshold);
                let below_max = rule
                    .max_threshold
                    .map_or(true, |max| days_until <= i64::from(max));
                if above_min && below_max {
                    rate *= Decimal::ONE + rule.adjustment_percent / dec!(100);
                }
            }
            // DEMAND and anything unknown: reserved, no adjustment
            _ => {}
        }
    }

    rate
}

/// Compute the discounts applying to a stay.
///
/// A discount qualifies when it is active, its validity window covers the
/// check-in date, and the stay meets its minimum nights. PERCENTAGE
/// discounts take `value`% of the base amount, FIXED discounts take `value`
/// outright. Qualifying discounts stack without cap or precedence.
pub fn apply_discounts(
    discounts: &[Discount],
    base_amount: Decimal,
    nights: i64,
    check_in_date: NaiveDate,
) -> (Decimal, Vec<DiscountDetail>) {
    let mut discount_amount = Decimal::ZERO;
    let mut details = Vec::new();

    for discount in discounts {
        if !discount.is_active || !discount.is_valid_on(check_in_date) {
            continue;
        }
        if let Some(min_nights) = discount.min_nights {
            if nights < i64::from(min_nights) {
                continue;
            }
        }

        let amount = match discount.discount_type.as_str() {
            "PERCENTAGE" => base_amount * discount.value / dec!(100),
            "FIXED" => discount.value,
            _ => continue,
        };

        discount_amount += amount;
        details.push(DiscountDetail {
            name: discount.name.clone(),
            discount_type: discount.discount_type.clone(),
            amount,
        });
    }

    (discount_amount, details)
}

/// Compute the package contribution for a stay.
///
/// Packages always contribute zero for now; the composer is still invoked so
/// quotes carry the package fields.
pub fn apply_packages(_nights: i64) -> (Decimal, Vec<PackageDetail>) {
    (Decimal::ZERO, Vec::new())
}

/// Price a full stay against a loaded catalog snapshot.
///
/// Walks the half-open night range `[check_in, check_out)`, resolving the
/// season and rate row per night, applying occupancy pricing and yield
/// rules, then composes discounts, packages and tax over the aggregate.
pub fn calculate_stay_quote(
    ctx: &RateContext,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    adults: u32,
    children: u32,
    today: NaiveDate,
) -> Result<PricingBreakdown, PricingError> {
    let nights = (check_out_date - check_in_date).num_days();
    if nights <= 0 {
        return Err(PricingError::InvalidDateRange);
    }

    let mut daily_rates = Vec::with_capacity(nights as usize);
    let mut total_base = Decimal::ZERO;
    let mut current_date = check_in_date;

    while current_date < check_out_date {
        let season = resolve_season(&ctx.seasons, current_date);
        let season_id = season.map(|s| s.id);

        let room_rate = ctx
            .rates
            .iter()
            .find(|r| r.is_active && r.season_id == season_id)
            .ok_or(PricingError::RateNotFound { date: current_date })?;

        let mut rate = nightly_base(room_rate, adults, children);
        rate = apply_yield_rules(&ctx.yield_rules, current_date, today, rate);

        daily_rates.push(DailyRate {
            date: current_date,
            rate,
            season: season
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Standard".to_string()),
        });

        total_base += rate;
        current_date += Duration::days(1);
    }

    let (discount_amount, discount_details) =
        apply_discounts(&ctx.discounts, total_base, nights, check_in_date);
    let (package_value, package_details) = apply_packages(nights);

    let subtotal = total_base - discount_amount;
    let tax_amount = subtotal * TAX_RATE;
    let total_amount = subtotal + tax_amount + package_value;
    // Guarded above; kept as a fallback so the division can never panic
    let average_per_night = if nights > 0 {
        total_amount / Decimal::from(nights)
    } else {
        Decimal::ZERO
    };

    Ok(PricingBreakdown {
        nights,
        adults,
        children,
        daily_rates,
        base_amount: total_base,
        discount_amount,
        discount_details,
        package_value,
        package_details,
        subtotal,
        tax_rate: TAX_RATE,
        tax_amount,
        total_amount,
        average_per_night,
    })
}

/// Rank successfully quoted rate plans by total, cheapest first.
pub fn rank_comparisons(quotes: Vec<(RatePlan, PricingBreakdown)>) -> Vec<RateComparison> {
    let mut comparisons: Vec<RateComparison> = quotes
        .into_iter()
        .map(|(plan, quote)| RateComparison {
            rate_plan_id: plan.id,
            rate_plan_name: plan.name,
            rate_type: plan.rate_type,
            is_refundable: plan.is_refundable,
            total_amount: quote.total_amount,
            average_per_night: quote.average_per_night,
            has_discount: quote.discount_amount > Decimal::ZERO,
            includes_package: quote.package_value > Decimal::ZERO,
        })
        .collect();

    comparisons.sort_by(|a, b| a.total_amount.cmp(&b.total_amount));
    comparisons
}
