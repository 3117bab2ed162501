//! Season rules for the price evaluator.
//!
//! The month-to-multiplier table is fixed at compile time.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Seasonal band a booking date falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// June through September
    High,
    /// December through February
    Low,
    /// Everything else
    Standard,
}

impl Season {
    /// Select the season for a calendar month (1-12).
    pub fn for_month(month: u32) -> Self {
        match month {
            6..=9 => Season::High,
            12 | 1 | 2 => Season::Low,
            _ => Season::Standard,
        }
    }

    /// Price multiplier applied to the base price
    pub fn multiplier(self) -> Decimal {
        match self {
            Season::High => dec!(1.5),
            Season::Low => dec!(0.8),
            Season::Standard => dec!(1.0),
        }
    }

    /// Human-readable label naming the rule that applied
    pub fn reason(self) -> &'static str {
        match self {
            Season::High => "High Season (Summer)",
            Season::Low => "Low Season (Winter)",
            Season::Standard => "Standard Season",
        }
    }
}
