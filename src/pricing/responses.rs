//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::services::PriceOutcome;

/// Response for price prediction
///
/// `multiplier` is left out of the JSON entirely on the fallback path.
/// Consumers must read its absence as "no seasonal adjustment applied".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResultResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub predicted_price: Decimal,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub multiplier: Option<Decimal>,
    pub reason: String,
}

impl From<&PriceOutcome> for PriceResultResponse {
    fn from(outcome: &PriceOutcome) -> Self {
        Self {
            predicted_price: outcome.predicted_price(),
            multiplier: outcome.multiplier(),
            reason: outcome.reason(),
        }
    }
}
