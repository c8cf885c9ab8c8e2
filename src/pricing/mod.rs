//! Pricing engine module for the HotelOps PMS.
//!
//! Computes dynamic nightly rates with seasons, occupancy-based pricing,
//! yield management rules, discounts and packages. Called by the PMS via
//! HTTP/JSON for quoting and rate comparison.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use routes::router;
pub use services::PricingError;
