use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Roman tourism season of a month. Informational; the price itself uses the
/// per-month multiplier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Low,
    Shoulder,
    High,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Low => "low",
            Season::Shoulder => "shoulder",
            Season::High => "high",
        })
    }
}

/// The priced result for a single night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub date: NaiveDate,
    pub base_price: Decimal,
    pub season: Season,
    pub seasonal_multiplier: Decimal,
    pub dow_multiplier: Decimal,
    pub event_multiplier: Decimal,
    /// Names of every event running on `date`, including those that did not
    /// set the multiplier.
    pub events: Vec<String>,
    pub suggested_price: Decimal,
    /// Lower end of the recommended booking band.
    pub min_price: Decimal,
    /// Upper end of the recommended booking band.
    pub max_price: Decimal,
}
