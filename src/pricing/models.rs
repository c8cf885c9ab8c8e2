//! Database models for the rate catalog.
//!
//! These models use sqlx's FromRow derive for direct deserialization from
//! the PMS rate tables.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Rate plan from rates_rateplan
#[derive(Debug, Clone, FromRow)]
pub struct RatePlan {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub code: String,
    pub rate_type: String,
    pub is_refundable: bool,
    pub is_active: bool,
}

/// Pricing season from rates_season
///
/// Seasons are inclusive date intervals. Overlapping seasons are resolved
/// by priority (higher wins).
#[derive(Debug, Clone, FromRow)]
pub struct Season {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub priority: i32,
    pub is_active: bool,
}

impl Season {
    /// Check if a date falls inside the season (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Price row from rates_roomrate for a (rate plan, room type, season) triple.
///
/// `season_id` is None for the base ("Standard") row; base and seasonal rows
/// are looked up exclusively, never as fallbacks for each other.
#[derive(Debug, Clone, FromRow)]
pub struct RoomRate {
    pub id: i64,
    pub rate_plan_id: i64,
    pub room_type_id: i64,
    pub season_id: Option<i64>,
    pub single_rate: Decimal,
    pub double_rate: Decimal,
    pub extra_adult: Decimal,
    pub extra_child: Decimal,
    pub is_active: bool,
}

/// Yield management rule from rates_yieldrule
///
/// Trigger types: OCCUPANCY, DAY_AHEAD, DEMAND. Thresholds are lead-time
/// bounds in days and only apply to DAY_AHEAD rules.
#[derive(Debug, Clone, FromRow)]
pub struct YieldRule {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub trigger_type: String,
    pub min_threshold: i32,
    pub max_threshold: Option<i32>,
    pub adjustment_percent: Decimal,
    pub priority: i32,
    pub is_active: bool,
}

/// Promotional discount from rates_discount
#[derive(Debug, Clone, FromRow)]
pub struct Discount {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub code: String,
    pub discount_type: String,
    pub value: Decimal,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub min_nights: Option<i32>,
    pub is_active: bool,
}

impl Discount {
    /// Check if the discount window covers the given check-in date
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}
