//! Response DTOs for pricing API endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One night of a stay with its resolved rate and season
#[derive(Debug, Clone, Serialize)]
pub struct DailyRate {
    pub date: NaiveDate,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    /// Season name, or "Standard" when no season covers the night
    pub season: String,
}

/// A discount applied to a quote
#[derive(Debug, Clone, Serialize)]
pub struct DiscountDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub discount_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// A package applied to a quote (currently always empty)
#[derive(Debug, Clone, Serialize)]
pub struct PackageDetail {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Full pricing breakdown for a stay
#[derive(Debug, Clone, Serialize)]
pub struct PricingBreakdown {
    pub nights: i64,
    pub adults: u32,
    pub children: u32,
    pub daily_rates: Vec<DailyRate>,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    pub discount_details: Vec<DiscountDetail>,
    #[serde(with = "rust_decimal::serde::str")]
    pub package_value: Decimal,
    pub package_details: Vec<PackageDetail>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_per_night: Decimal,
}

/// One row of a rate-plan comparison
#[derive(Debug, Clone, Serialize)]
pub struct RateComparison {
    pub rate_plan_id: i64,
    pub rate_plan_name: String,
    pub rate_type: String,
    pub is_refundable: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub average_per_night: Decimal,
    pub has_discount: bool,
    pub includes_package: bool,
}

/// Response for the compare-rates endpoint
#[derive(Debug, Serialize)]
pub struct CompareRatesResponse {
    pub room_type_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub rate_plans: Vec<RateComparison>,
}
