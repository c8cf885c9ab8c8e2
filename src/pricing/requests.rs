//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

/// Request to price a stay
#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    pub room_type_id: i64,
    pub rate_plan_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

fn default_adults() -> u32 {
    1
}

/// Request to compare rates across all active plans of a property
#[derive(Debug, Deserialize)]
pub struct CompareRatesRequest {
    pub property_id: i64,
    pub room_type_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}
