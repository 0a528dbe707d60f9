use crate::error::PricingError;
use chrono::NaiveDate;
pub use core_types::Event;
use core_types::GuestType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// An immutable, validated list of events.
///
/// Lookup is by date containment; events may overlap.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Builds a catalog, rejecting inverted intervals and non-positive impacts.
    pub fn new(events: Vec<Event>) -> Result<Self, PricingError> {
        for event in &events {
            if event.end < event.start {
                return Err(PricingError::InvertedEvent {
                    name: event.name.clone(),
                    start: event.start,
                    end: event.end,
                });
            }
            if event.impact <= Decimal::ZERO {
                return Err(PricingError::InvalidImpact {
                    name: event.name.clone(),
                    impact: event.impact,
                });
            }
        }
        Ok(Self { events })
    }

    /// An empty catalog: every date gets an event factor of 1.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The Rome 2025 calendar (Jubilee year) the engine ships with.
    pub fn rome_2025() -> Result<Self, PricingError> {
        use GuestType::*;

        let rows: [(&str, &str, &str, Decimal, &[GuestType]); 13] = [
            ("Capodanno", "2024-12-30", "2025-01-02", dec!(1.6), &[Couple, Group]),
            ("Giubileo Opening", "2025-01-01", "2025-01-15", dec!(1.5), &[Family, Couple]),
            ("San Valentino", "2025-02-13", "2025-02-16", dec!(1.4), &[Couple]),
            ("Maratona Roma", "2025-03-15", "2025-03-17", dec!(1.3), &[Solo, Group]),
            ("Pasqua", "2025-04-18", "2025-04-22", dec!(1.7), &[Family, Couple]),
            ("1 Maggio", "2025-04-30", "2025-05-04", dec!(1.4), &[Couple, Group]),
            ("Estate Romana", "2025-06-15", "2025-08-31", dec!(1.2), &[Family, Couple]),
            ("Ferragosto", "2025-08-14", "2025-08-17", dec!(1.3), &[Family]),
            ("Festival Cinema", "2025-10-15", "2025-10-26", dec!(1.3), &[Couple, Solo]),
            ("Ponte Ognissanti", "2025-10-31", "2025-11-03", dec!(1.4), &[Couple, Family]),
            ("Immacolata", "2025-12-06", "2025-12-09", dec!(1.4), &[Family, Couple]),
            ("Natale", "2025-12-22", "2025-12-28", dec!(1.6), &[Family]),
            ("Capodanno 2026", "2025-12-29", "2026-01-02", dec!(1.7), &[Couple, Group]),
        ];

        let events = rows
            .into_iter()
            .map(|(name, start, end, impact, guests)| {
                Ok(Event {
                    name: name.to_string(),
                    start: parse_date(start)?,
                    end: parse_date(end)?,
                    impact,
                    target_guests: guests.to_vec(),
                })
            })
            .collect::<Result<Vec<_>, PricingError>>()?;

        Self::new(events)
    }

    /// Returns a new catalog with `extra` appended after validation.
    pub fn extended(&self, extra: Vec<Event>) -> Result<Self, PricingError> {
        let mut events = self.events.clone();
        events.extend(extra);
        Self::new(events)
    }

    /// Every event whose interval contains `date`, in catalog order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.contains(date)).collect()
    }

    /// `max(impacts on date ∪ {1.0})`: overlapping events never stack and an
    /// event never pulls the price below its no-event level.
    pub fn impact_on(&self, date: NaiveDate) -> Decimal {
        self.events
            .iter()
            .filter(|e| e.contains(date))
            .map(|e| e.impact)
            .fold(Decimal::ONE, Decimal::max)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, PricingError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| PricingError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(name: &str, start: NaiveDate, end: NaiveDate, impact: Decimal) -> Event {
        Event {
            name: name.to_string(),
            start,
            end,
            impact,
            target_guests: vec![],
        }
    }

    #[test]
    fn rome_catalog_loads_all_events() {
        let catalog = EventCatalog::rome_2025().unwrap();
        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.events()[4].name, "Pasqua");
        assert_eq!(catalog.events()[4].impact, dec!(1.7));
    }

    #[test]
    fn containment_is_inclusive_at_both_ends() {
        let e = event("Pasqua", d(2025, 4, 18), d(2025, 4, 22), dec!(1.7));
        assert!(e.contains(d(2025, 4, 18)));
        assert!(e.contains(d(2025, 4, 22)));
        assert!(!e.contains(d(2025, 4, 17)));
        assert!(!e.contains(d(2025, 4, 23)));
    }

    #[test]
    fn overlapping_events_take_the_maximum_impact() {
        // Ferragosto (1.3) sits inside Estate Romana (1.2).
        let catalog = EventCatalog::rome_2025().unwrap();
        let day = d(2025, 8, 15);
        assert_eq!(catalog.events_on(day).len(), 2);
        assert_eq!(catalog.impact_on(day), dec!(1.3));

        // Capodanno (1.6) and Giubileo Opening (1.5) overlap on Jan 1-2.
        assert_eq!(catalog.impact_on(d(2025, 1, 1)), dec!(1.6));
    }

    #[test]
    fn no_event_means_neutral_impact() {
        let catalog = EventCatalog::rome_2025().unwrap();
        assert!(catalog.events_on(d(2025, 9, 10)).is_empty());
        assert_eq!(catalog.impact_on(d(2025, 9, 10)), Decimal::ONE);
        assert_eq!(EventCatalog::empty().impact_on(d(2025, 4, 19)), Decimal::ONE);
    }

    #[test]
    fn sub_unit_impact_is_floored_at_neutral() {
        let catalog = EventCatalog::new(vec![
            event("Sciopero", d(2025, 9, 13), d(2025, 9, 13), dec!(0.8)),
        ])
        .unwrap();
        assert_eq!(catalog.events_on(d(2025, 9, 13)).len(), 1);
        assert_eq!(catalog.impact_on(d(2025, 9, 13)), Decimal::ONE);
    }

    #[test]
    fn rejects_inverted_interval() {
        let err = EventCatalog::new(vec![event("Bad", d(2025, 5, 2), d(2025, 5, 1), dec!(1.2))])
            .unwrap_err();
        assert!(matches!(err, PricingError::InvertedEvent { .. }));
    }

    #[test]
    fn rejects_non_positive_impact() {
        let err = EventCatalog::new(vec![event("Free", d(2025, 5, 1), d(2025, 5, 2), dec!(0))])
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidImpact { .. }));
    }

    #[test]
    fn extended_appends_and_validates() {
        let base = EventCatalog::rome_2025().unwrap();
        let extra = event("Concerto", d(2025, 9, 10), d(2025, 9, 10), dec!(1.8));
        let catalog = base.extended(vec![extra]).unwrap();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.impact_on(d(2025, 9, 10)), dec!(1.8));
    }
}
