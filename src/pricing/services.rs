//! Price evaluation services.
//!
//! Turns a booking request into a seasonally-adjusted price. Evaluation is
//! total: every failure becomes a [`PriceOutcome::Fallback`] carrying the
//! best base price that could be recovered.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::calculators::apply_multiplier;
use super::models::Season;
use super::requests::PredictRequest;

/// Date format accepted for booking dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix on the reason of every fallback result
pub const FALLBACK_REASON_PREFIX: &str = "Prediction Failed (Fallback Used). Error: ";

/// Price evaluation error types
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("Failed to decode JSON object: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("could not convert basePrice to a number: {0}")]
    InvalidBasePrice(String),

    #[error("basePrice {0} is outside the supported range")]
    BasePriceOutOfRange(String),

    #[error("basePrice {0} is too large to apply a seasonal multiplier")]
    PriceOverflow(Decimal),

    #[error("No date provided")]
    MissingDate,

    #[error("date must be a string, got {0}")]
    InvalidDateType(String),

    #[error("time data '{value}' does not match format '%Y-%m-%d'")]
    InvalidDate { value: String },
}

/// Result of evaluating a booking request
#[derive(Debug)]
pub enum PriceOutcome {
    /// A season rule applied
    Priced {
        predicted_price: Decimal,
        season: Season,
    },
    /// Evaluation failed; the price is the unadjusted base price (or zero)
    Fallback {
        predicted_price: Decimal,
        error: PredictionError,
    },
}

impl PriceOutcome {
    pub fn predicted_price(&self) -> Decimal {
        match self {
            PriceOutcome::Priced { predicted_price, .. }
            | PriceOutcome::Fallback { predicted_price, .. } => *predicted_price,
        }
    }

    /// Multiplier that was applied; `None` on the fallback path.
    pub fn multiplier(&self) -> Option<Decimal> {
        match self {
            PriceOutcome::Priced { season, .. } => Some(season.multiplier()),
            PriceOutcome::Fallback { .. } => None,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            PriceOutcome::Priced { season, .. } => season.reason().to_string(),
            PriceOutcome::Fallback { error, .. } => format!("{}{}", FALLBACK_REASON_PREFIX, error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PriceOutcome::Fallback { .. })
    }
}

/// Parse a booking date strictly as `YYYY-MM-DD`.
///
/// The year must be exactly four digits; month and day may drop their
/// leading zero. Signs and whitespace are rejected.
pub fn parse_booking_date(date: &str) -> Result<NaiveDate, PredictionError> {
    if date.is_empty() {
        return Err(PredictionError::MissingDate);
    }
    if !has_date_shape(date) {
        return Err(PredictionError::InvalidDate {
            value: date.to_string(),
        });
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| PredictionError::InvalidDate {
        value: date.to_string(),
    })
}

/// `chrono`'s `%Y` takes a sign and any digit count and numeric fields skip
/// leading spaces, so the layout is checked before handing it over.
fn has_date_shape(date: &str) -> bool {
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let digits = |field: &str, min: usize, max: usize| {
        (min..=max).contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
    };
    digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
}

/// Evaluate the seasonal price for a booking.
///
/// `room_type` is accepted for forward compatibility and does not affect
/// the price. On a bad date, or a price too large to multiply, the base
/// price is returned unadjusted.
pub fn evaluate(base_price: Decimal, date: &str, _room_type: &str) -> PriceOutcome {
    let season = match parse_booking_date(date) {
        Ok(date) => Season::for_month(date.month()),
        Err(error) => {
            return PriceOutcome::Fallback {
                predicted_price: base_price,
                error,
            }
        }
    };

    match apply_multiplier(base_price, season) {
        Some(predicted_price) => PriceOutcome::Priced {
            predicted_price,
            season,
        },
        None => PriceOutcome::Fallback {
            predicted_price: base_price,
            error: PredictionError::PriceOverflow(base_price),
        },
    }
}

/// Decode a raw `/predict` body once and evaluate it.
///
/// An undecodable body falls back to a price of zero. A decodable body with
/// a bad field falls back to the caller's `basePrice` when it is numeric.
pub fn predict_from_body(body: &[u8]) -> PriceOutcome {
    let raw = match PredictRequest::decode(body) {
        Ok(raw) => raw,
        Err(error) => {
            return PriceOutcome::Fallback {
                predicted_price: Decimal::ZERO,
                error,
            }
        }
    };

    match raw.to_price_request() {
        Ok(request) => evaluate(request.base_price, &request.date, &request.room_type),
        Err(error) => PriceOutcome::Fallback {
            predicted_price: raw.fallback_price(),
            error,
        },
    }
}
