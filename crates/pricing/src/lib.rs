//! # Dynamic Pricing Engine
//!
//! Suggests a nightly price for a rental on any date and classifies unbooked
//! calendar gaps into urgency and discount tiers.
//!
//! - **Pure logic:** depends only on `core-types`. No I/O, no clock; "today"
//!   is always passed in.
//! - **Fixed tables:** season, weekday and urgency factors are constant tables
//!   so they can be audited and asserted on directly.
//!
//! ## Public API
//!
//! - `PricingEngine`: `price_for`, `price_calendar`, `analyze_gap`, `gap_offer`.
//! - `EventCatalog` / `Event`: the date ranges that carry price premiums.
//! - `PriceQuote`, `GapPeriod`, `GapOffer`: the values handed to renderers.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod gap;
pub mod quote;

pub use catalog::{Event, EventCatalog};
pub use engine::{season_for, PricingEngine};
pub use error::PricingError;
pub use gap::{GapOffer, GapPeriod, Urgency};
pub use quote::{PriceQuote, Season};
