//! Request DTOs for pricing API endpoints.
//!
//! The `/predict` body is decoded once into [`PredictRequest`], whose fields
//! stay loosely typed so that a bad field can still yield a fallback price.
//! [`PredictRequest::to_price_request`] validates it into a [`PriceRequest`].

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::Value;

use super::services::PredictionError;

/// Base price used when the caller sends none
pub const DEFAULT_BASE_PRICE: Decimal = dec!(100);

/// Room type used when the caller sends none
pub const DEFAULT_ROOM_TYPE: &str = "Standard";

/// Raw `/predict` body as sent by the caller
///
/// A `roomType` that is not a string is treated as absent and becomes
/// [`DEFAULT_ROOM_TYPE`]; the field never affects the price.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(default)]
    pub base_price: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub room_type: Option<Value>,
}

/// Validated booking request handed to the evaluator
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRequest {
    pub base_price: Decimal,
    pub date: String,
    pub room_type: String,
}

impl PredictRequest {
    /// Decode a request body. Anything but a JSON object is rejected.
    pub fn decode(body: &[u8]) -> Result<Self, PredictionError> {
        let value: Value = serde_json::from_slice(body).map_err(PredictionError::MalformedBody)?;
        if !value.is_object() {
            return Err(PredictionError::NotAnObject);
        }
        serde_json::from_value(value).map_err(PredictionError::MalformedBody)
    }

    /// Validate the fields that feed the price calculation.
    ///
    /// `basePrice` is checked before `date`, so a request with both wrong
    /// reports the price error.
    pub fn to_price_request(&self) -> Result<PriceRequest, PredictionError> {
        let base_price = match &self.base_price {
            Some(value) => parse_price(value)?,
            None => DEFAULT_BASE_PRICE,
        };

        let date = match &self.date {
            None => return Err(PredictionError::MissingDate),
            Some(Value::String(date)) => date.clone(),
            Some(other) => return Err(PredictionError::InvalidDateType(json_type_name(other).to_string())),
        };

        let room_type = self
            .room_type
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_ROOM_TYPE)
            .to_string();

        Ok(PriceRequest {
            base_price,
            date,
            room_type,
        })
    }

    /// Price to report when evaluation fails: the caller's own `basePrice`
    /// if it is numeric, otherwise zero. The default price never applies here.
    pub fn fallback_price(&self) -> Decimal {
        self.base_price
            .as_ref()
            .and_then(|value| parse_price(value).ok())
            .unwrap_or(Decimal::ZERO)
    }
}

/// Smallest magnitude `Decimal` can hold (28 decimal places)
const MIN_REPRESENTABLE: f64 = 1e-28;

/// Read a price from a JSON number or numeric string.
///
/// Values with more precision than `Decimal` holds are rounded; values
/// beyond its range are reported as out of range.
fn parse_price(value: &Value) -> Result<Decimal, PredictionError> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(PredictionError::InvalidBasePrice(value.to_string())),
    };

    if let Ok(price) = Decimal::from_str(&text).or_else(|_| Decimal::from_scientific(&text)) {
        return Ok(price);
    }

    let float = match text.parse::<f64>() {
        Ok(float) if float.is_finite() => float,
        _ => return Err(PredictionError::InvalidBasePrice(value.to_string())),
    };
    if float.abs() < MIN_REPRESENTABLE {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_f64(float).ok_or_else(|| PredictionError::BasePriceOutOfRange(value.to_string()))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
