//! Seasonal pricing engine.
//!
//! Maps a booking request (base price, date, room type) to a seasonally
//! adjusted price using a fixed month-to-multiplier table.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_money;
pub use models::Season;
pub use routes::router;
pub use services::{evaluate, predict_from_body, PredictionError, PriceOutcome};
