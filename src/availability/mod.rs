//! Availability engine module for the HotelOps PMS.
//!
//! Detects booking conflicts against confirmed/checked-in reservations,
//! enumerates free rooms, builds per-date occupancy calendars and suggests
//! alternates. Availability here is advisory; the PMS enforces conflicts
//! transactionally at booking-commit time.

pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use routes::router;
pub use services::{validate_booking_dates, DateValidationError, MAX_STAY_DAYS};
