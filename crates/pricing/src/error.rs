use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("Property base price ({0}) must be greater than zero.")]
    InvalidBasePrice(Decimal),

    #[error("Event '{name}' ends ({end}) before it starts ({start}).")]
    InvertedEvent {
        name: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Event '{name}' has a non-positive impact multiplier ({impact}).")]
    InvalidImpact { name: String, impact: Decimal },

    #[error("Could not parse event date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
