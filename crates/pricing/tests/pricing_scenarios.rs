use chrono::{Datelike, NaiveDate};
use core_types::{GuestType, Property};
use pricing::engine::{DOW_MULTIPLIERS, SEASONAL_MULTIPLIERS};
use pricing::{EventCatalog, PricingEngine, Urgency};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rome_engine(base: Decimal) -> PricingEngine {
    PricingEngine::new(Property::new("Casa Trastevere", base), EventCatalog::rome_2025().unwrap())
        .unwrap()
}

#[test]
fn every_night_of_2025_matches_the_closed_form() {
    let engine = rome_engine(dec!(120));
    let catalog = engine.catalog().clone();

    for quote in engine.price_calendar(d(2025, 1, 1), d(2025, 12, 31)) {
        let date = quote.date;
        let expected = (dec!(120)
            * SEASONAL_MULTIPLIERS[date.month0() as usize]
            * DOW_MULTIPLIERS[date.weekday().num_days_from_monday() as usize]
            * catalog
                .events_on(date)
                .iter()
                .map(|e| e.impact)
                .chain(std::iter::once(Decimal::ONE))
                .max()
                .unwrap())
        .round();
        assert_eq!(quote.suggested_price, expected, "mismatch on {date}");
        assert!(quote.min_price <= quote.suggested_price);
        assert!(quote.suggested_price <= quote.max_price);
    }
}

#[test]
fn new_year_overlap_uses_the_highest_single_premium() {
    // 2025-12-31 is a Wednesday in December inside "Capodanno 2026" only.
    let quote = rome_engine(dec!(100)).price_for(d(2025, 12, 31));
    assert_eq!(quote.events, vec!["Capodanno 2026".to_string()]);
    // 100 × 1.2 × 0.95 × 1.7 = 193.8
    assert_eq!(quote.suggested_price, dec!(194));

    // 2025-01-01 (Wednesday) sits in both Capodanno (1.6) and Giubileo Opening (1.5).
    let quote = rome_engine(dec!(100)).price_for(d(2025, 1, 1));
    assert_eq!(quote.events.len(), 2);
    assert_eq!(quote.event_multiplier, dec!(1.6));
    // 100 × 0.8 × 0.95 × 1.6 = 121.6
    assert_eq!(quote.suggested_price, dec!(122));
}

#[test]
fn discount_event_never_prices_below_the_plain_weekday() {
    let catalog = EventCatalog::new(vec![pricing::Event {
        name: "Sciopero dei trasporti".to_string(),
        start: d(2025, 9, 13),
        end: d(2025, 9, 13),
        impact: dec!(0.8),
        target_guests: vec![],
    }])
    .unwrap();
    let engine = PricingEngine::new(Property::new("Monti Loft", dec!(100)), catalog).unwrap();

    // Both Saturdays in September: 100 × 1.25 × 1.2 = 150.
    let inside = engine.price_for(d(2025, 9, 13));
    let outside = engine.price_for(d(2025, 9, 20));
    assert_eq!(inside.events, vec!["Sciopero dei trasporti".to_string()]);
    assert_eq!(inside.event_multiplier, Decimal::ONE);
    assert_eq!(inside.suggested_price, dec!(150));
    assert!(inside.suggested_price >= outside.suggested_price);
}

#[test]
fn weekend_gap_next_day_is_a_critical_couples_offer() {
    let engine = rome_engine(dec!(150));
    // Friday 2025-05-09 → Sunday 2025-05-11, seen from Thursday.
    let gap = engine.analyze_gap(d(2025, 5, 9), d(2025, 5, 11), d(2025, 5, 8));
    assert_eq!(gap.nights, 2);
    assert_eq!(gap.days_until, 1);
    assert_eq!(gap.urgency, Urgency::Critical);
    assert_eq!(gap.target_segment, GuestType::Couple);

    let offer = engine.gap_offer(&gap);
    assert_eq!(offer.discounted_price, dec!(105));
    assert_eq!(offer.discount_percent, dec!(30));
}

#[test]
fn quotes_serialize_with_lowercase_enums() {
    let quote = rome_engine(dec!(120)).price_for(d(2025, 4, 19));
    let json = serde_json::to_value(&quote).unwrap();
    assert_eq!(json["season"], "high");
    assert_eq!(json["date"], "2025-04-19");
    assert_eq!(json["events"][0], "Pasqua");
}
