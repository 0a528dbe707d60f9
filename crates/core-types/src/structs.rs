use crate::enums::{GuestType, Metric};
use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static attributes of a rental unit.
///
/// A `Property` is read once (usually from `config.toml`) and never changes
/// for the lifetime of a pricing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    /// Neighbourhood the unit sits in (e.g. "Trastevere").
    #[serde(default)]
    pub zone: String,
    /// Kind of unit (e.g. "Appartamento", "Loft").
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub max_guests: u32,
    /// Nightly price before any seasonal, weekday or event adjustment.
    pub base_price: Decimal,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub metro_distance: String,
    #[serde(default)]
    pub nearby_attractions: BTreeMap<String, String>,
}

impl Property {
    /// A minimal property with only a name and a base price.
    pub fn new(name: impl Into<String>, base_price: Decimal) -> Self {
        Self {
            name: name.into(),
            zone: String::new(),
            kind: String::new(),
            bedrooms: 0,
            bathrooms: 0,
            max_guests: 0,
            base_price,
            highlights: Vec::new(),
            metro_distance: String::new(),
            nearby_attractions: BTreeMap::new(),
        }
    }
}

/// A named date range that moves demand, and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// First day of the event (inclusive).
    pub start: NaiveDate,
    /// Last day of the event (inclusive).
    pub end: NaiveDate,
    /// Price multiplier applied while the event runs; above 1.0 is a premium.
    pub impact: Decimal,
    #[serde(default)]
    pub target_guests: Vec<GuestType>,
}

impl Event {
    /// Inclusive at both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One observed piece of content and its raw counters.
///
/// Rates are never stored; they are derived on demand and are defined as
/// zero whenever their denominator is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    pub content_id: String,
    pub title: String,
    /// Publish date as a sortable string (ISO `YYYY-MM-DD` in practice).
    pub publish_date: String,
    pub content_type: String,
    pub channel: String,
    pub category: String,
    pub views: u64,
    pub engagement: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub shares: u64,
    pub comments: u64,
    pub word_count: u64,
    /// Average seconds on page.
    pub time_on_page: f64,
}

impl ContentItem {
    /// `engagement / views * 100`.
    pub fn engagement_rate(&self) -> Decimal {
        percentage(self.engagement, self.views)
    }

    /// `clicks / views * 100`.
    pub fn click_through_rate(&self) -> Decimal {
        percentage(self.clicks, self.views)
    }

    /// `conversions / clicks * 100`.
    pub fn conversion_rate(&self) -> Decimal {
        percentage(self.conversions, self.clicks)
    }

    /// Reads the given metric off this item.
    pub fn metric(&self, metric: Metric) -> Decimal {
        match metric {
            Metric::EngagementRate => self.engagement_rate(),
            Metric::ClickThroughRate => self.click_through_rate(),
            Metric::ConversionRate => self.conversion_rate(),
            Metric::Views => Decimal::from(self.views),
            Metric::Engagement => Decimal::from(self.engagement),
            Metric::Clicks => Decimal::from(self.clicks),
            Metric::Conversions => Decimal::from(self.conversions),
            Metric::Shares => Decimal::from(self.shares),
            Metric::Comments => Decimal::from(self.comments),
            Metric::WordCount => Decimal::from(self.word_count),
            Metric::TimeOnPage => Decimal::from_f64(self.time_on_page).unwrap_or(Decimal::ZERO),
        }
    }
}

fn percentage(numerator: u64, denominator: u64) -> Decimal {
    if denominator == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(numerator) / Decimal::from(denominator) * dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(views: u64, engagement: u64, clicks: u64, conversions: u64) -> ContentItem {
        ContentItem {
            views,
            engagement,
            clicks,
            conversions,
            ..Default::default()
        }
    }

    #[test]
    fn rates_are_percentages() {
        let it = item(5000, 250, 150, 15);
        assert_eq!(it.engagement_rate(), dec!(5));
        assert_eq!(it.click_through_rate(), dec!(3));
        assert_eq!(it.conversion_rate(), dec!(10));
    }

    #[test]
    fn zero_denominators_yield_zero() {
        let it = item(0, 40, 0, 3);
        assert_eq!(it.engagement_rate(), Decimal::ZERO);
        assert_eq!(it.click_through_rate(), Decimal::ZERO);
        assert_eq!(it.conversion_rate(), Decimal::ZERO);
    }

    #[test]
    fn metric_dispatches_to_counters() {
        let mut it = item(1200, 60, 30, 3);
        it.shares = 7;
        it.time_on_page = 42.5;
        assert_eq!(it.metric(Metric::Views), dec!(1200));
        assert_eq!(it.metric(Metric::Shares), dec!(7));
        assert_eq!(it.metric(Metric::EngagementRate), dec!(5));
        assert_eq!(it.metric(Metric::TimeOnPage), dec!(42.5));
    }

    #[test]
    fn missing_json_fields_default() {
        let it: ContentItem = serde_json::from_str(r#"{"title":"Hello","views":10}"#).unwrap();
        assert_eq!(it.title, "Hello");
        assert_eq!(it.views, 10);
        assert_eq!(it.category, "");
        assert_eq!(it.word_count, 0);
    }
}
