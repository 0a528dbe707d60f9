use crate::catalog::EventCatalog;
use crate::error::PricingError;
use crate::quote::{PriceQuote, Season};
use chrono::{Datelike, NaiveDate};
use core_types::Property;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Demand multiplier per calendar month, January first.
pub const SEASONAL_MULTIPLIERS: [Decimal; 12] = [
    dec!(0.8),  // Jan - low
    dec!(0.8),  // Feb - low
    dec!(1.1),  // Mar - shoulder
    dec!(1.3),  // Apr - high
    dec!(1.3),  // May - high
    dec!(1.2),  // Jun - high
    dec!(1.0),  // Jul - hot, average
    dec!(0.95), // Aug - hot, locals away
    dec!(1.25), // Sep - high
    dec!(1.3),  // Oct - high
    dec!(1.0),  // Nov - shoulder
    dec!(1.2),  // Dec - high (Christmas)
];

/// Demand multiplier per weekday, Monday first.
pub const DOW_MULTIPLIERS: [Decimal; 7] = [
    dec!(0.9),  // Mon
    dec!(0.9),  // Tue
    dec!(0.95), // Wed
    dec!(1.0),  // Thu
    dec!(1.15), // Fri
    dec!(1.2),  // Sat
    dec!(1.0),  // Sun
];

/// Booking band around the suggested price.
pub const BAND_LOWER: Decimal = dec!(0.85);
pub const BAND_UPPER: Decimal = dec!(1.15);

pub fn seasonal_multiplier(date: NaiveDate) -> Decimal {
    SEASONAL_MULTIPLIERS[date.month0() as usize]
}

pub fn dow_multiplier(date: NaiveDate) -> Decimal {
    DOW_MULTIPLIERS[date.weekday().num_days_from_monday() as usize]
}

pub fn season_for(date: NaiveDate) -> Season {
    match date.month() {
        1 | 2 => Season::Low,
        3 | 11 => Season::Shoulder,
        4 | 5 | 6 | 9 | 10 | 12 => Season::High,
        _ => Season::Shoulder,
    }
}

/// A stateless dynamic pricer for one property against one event catalog.
///
/// Engines share nothing; several can run side by side on different threads.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    property: Property,
    catalog: EventCatalog,
}

impl PricingEngine {
    /// Creates a new engine, rejecting a property whose base price is not positive.
    pub fn new(property: Property, catalog: EventCatalog) -> Result<Self, PricingError> {
        if property.base_price <= Decimal::ZERO {
            return Err(PricingError::InvalidBasePrice(property.base_price));
        }
        tracing::debug!(
            property = %property.name,
            base_price = %property.base_price,
            events = catalog.len(),
            "Pricing engine ready."
        );
        Ok(Self { property, catalog })
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Prices a single night.
    ///
    /// `suggested = base × season × weekday × max(event impacts ∪ {1})`, rounded
    /// to whole currency units; the band is 85%–115% of the rounded suggestion.
    /// Past dates are priced like any other.
    pub fn price_for(&self, date: NaiveDate) -> PriceQuote {
        let base = self.property.base_price;
        let seasonal = seasonal_multiplier(date);
        let dow = dow_multiplier(date);

        let events = self.catalog.events_on(date);
        let event_multiplier = self.catalog.impact_on(date);

        let suggested = (base * seasonal * dow * event_multiplier).round();

        tracing::debug!(
            %date,
            %seasonal,
            %dow,
            %event_multiplier,
            %suggested,
            "Priced night."
        );

        PriceQuote {
            date,
            base_price: base,
            season: season_for(date),
            seasonal_multiplier: seasonal,
            dow_multiplier: dow,
            event_multiplier,
            events: events.iter().map(|e| e.name.clone()).collect(),
            suggested_price: suggested,
            min_price: (suggested * BAND_LOWER).round(),
            max_price: (suggested * BAND_UPPER).round(),
        }
    }

    /// One quote per night over `[from, to]`, both inclusive.
    pub fn price_calendar(&self, from: NaiveDate, to: NaiveDate) -> Vec<PriceQuote> {
        from.iter_days()
            .take_while(|d| *d <= to)
            .map(|d| self.price_for(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Event;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn engine(base: Decimal) -> PricingEngine {
        PricingEngine::new(
            Property::new("Casa Trastevere", base),
            EventCatalog::rome_2025().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn tables_match_published_values() {
        assert_eq!(SEASONAL_MULTIPLIERS[7], dec!(0.95));
        assert_eq!(SEASONAL_MULTIPLIERS[8], dec!(1.25));
        assert_eq!(DOW_MULTIPLIERS[4], dec!(1.15));
        assert_eq!(DOW_MULTIPLIERS[5], dec!(1.2));
    }

    #[test]
    fn easter_saturday_scenario() {
        // 2025-04-19: April (1.3), Saturday (1.2), Pasqua (1.7).
        let quote = engine(dec!(120)).price_for(d(2025, 4, 19));
        assert_eq!(quote.seasonal_multiplier, dec!(1.3));
        assert_eq!(quote.dow_multiplier, dec!(1.2));
        assert_eq!(quote.event_multiplier, dec!(1.7));
        assert_eq!(quote.events, vec!["Pasqua".to_string()]);
        assert_eq!(quote.suggested_price, dec!(318));
        assert_eq!(quote.min_price, dec!(270));
        assert_eq!(quote.max_price, dec!(366));
        assert_eq!(quote.season, Season::High);
    }

    #[test]
    fn plain_weekday_has_no_event_factor() {
        // 2025-09-10 is a Wednesday with no event: 100 × 1.25 × 0.95 = 118.75.
        let quote = engine(dec!(100)).price_for(d(2025, 9, 10));
        assert_eq!(quote.event_multiplier, Decimal::ONE);
        assert!(quote.events.is_empty());
        assert_eq!(quote.suggested_price, dec!(119));
    }

    #[test]
    fn event_night_never_cheaper_than_same_weekday_outside_events() {
        let engine = engine(dec!(120));
        // Both Saturdays in April; the 26th is after Pasqua.
        let inside = engine.price_for(d(2025, 4, 19));
        let outside = engine.price_for(d(2025, 4, 26));
        assert!(inside.suggested_price >= outside.suggested_price);
    }

    #[test]
    fn quoting_is_deterministic() {
        let engine = engine(dec!(95.5));
        let day = d(2025, 12, 24);
        assert_eq!(engine.price_for(day), engine.price_for(day));
    }

    #[test]
    fn calendar_is_inclusive_and_empty_when_reversed() {
        let engine = engine(dec!(120));
        let week = engine.price_calendar(d(2025, 4, 14), d(2025, 4, 20));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, d(2025, 4, 14));
        assert_eq!(week[6].date, d(2025, 4, 20));
        assert!(engine.price_calendar(d(2025, 4, 20), d(2025, 4, 14)).is_empty());
    }

    #[test]
    fn seasons_follow_month_groups() {
        assert_eq!(season_for(d(2025, 2, 1)), Season::Low);
        assert_eq!(season_for(d(2025, 11, 1)), Season::Shoulder);
        assert_eq!(season_for(d(2025, 7, 1)), Season::Shoulder);
        assert_eq!(season_for(d(2025, 10, 1)), Season::High);
    }

    #[test]
    fn rejects_non_positive_base_price() {
        let err = PricingEngine::new(Property::new("Free", dec!(0)), EventCatalog::empty())
            .unwrap_err();
        assert_eq!(err, PricingError::InvalidBasePrice(dec!(0)));
    }

    #[test]
    fn custom_catalog_is_respected() {
        let catalog = EventCatalog::new(vec![Event {
            name: "Derby".to_string(),
            start: d(2025, 9, 14),
            end: d(2025, 9, 14),
            impact: dec!(2),
            target_guests: vec![],
        }])
        .unwrap();
        let engine = PricingEngine::new(Property::new("Monti Loft", dec!(100)), catalog).unwrap();
        // Sunday in September: 100 × 1.25 × 1.0 × 2 = 250.
        assert_eq!(engine.price_for(d(2025, 9, 14)).suggested_price, dec!(250));
    }
}
