//! Pricing and availability engine for the HotelOps PMS.
//!
//! Computes dynamic room rates (seasons, occupancy pricing, yield rules,
//! discounts, packages) and room availability (booking conflicts, occupancy
//! calendars) over the PMS Postgres schema. The PMS calls this service over
//! HTTP/JSON; all tables are read-only from here.

pub mod availability;
pub mod db;
pub mod error;
pub mod pricing;

use sqlx::PgPool;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
