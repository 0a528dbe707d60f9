use crate::engine::PricingEngine;
use chrono::{Datelike, NaiveDate, Weekday};
use core_types::GuestType;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon an unbooked gap needs filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        })
    }
}

/// `(max days until start, urgency, discount)`, checked top to bottom.
const URGENCY_TIERS: [(i64, Urgency, Decimal); 3] = [
    (2, Urgency::Critical, dec!(0.30)),
    (7, Urgency::High, dec!(0.20)),
    (14, Urgency::Medium, dec!(0.15)),
];
const FALLBACK_TIER: (Urgency, Decimal) = (Urgency::Low, dec!(0.10));

/// Sunday gaps at least this long are pitched to families.
const FAMILY_MIN_NIGHTS: i64 = 4;

/// An unfilled `[start, end)` stretch of the calendar and how to sell it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub nights: i64,
    /// Days from "today" to `start`; negative for gaps already in the past.
    pub days_until: i64,
    /// Fraction in `[0, 1)` to take off the base price.
    pub suggested_discount: Decimal,
    pub target_segment: GuestType,
    pub urgency: Urgency,
}

/// The numbers behind a last-minute promotion for a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapOffer {
    pub discounted_price: Decimal,
    pub discount_percent: Decimal,
    pub urgency: Urgency,
    pub target_segment: GuestType,
}

/// Maps days-until-start to an urgency tier and its discount.
pub fn urgency_for(days_until: i64) -> (Urgency, Decimal) {
    URGENCY_TIERS
        .iter()
        .find(|(limit, _, _)| days_until <= *limit)
        .map(|(_, urgency, discount)| (*urgency, *discount))
        .unwrap_or(FALLBACK_TIER)
}

/// Picks the guest segment most likely to book a gap starting on `start`.
pub fn target_segment(start: NaiveDate, nights: i64) -> GuestType {
    match start.weekday() {
        Weekday::Fri | Weekday::Sat => GuestType::Couple,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => GuestType::Business,
        Weekday::Sun if nights >= FAMILY_MIN_NIGHTS => GuestType::Family,
        Weekday::Sun => GuestType::Couple,
    }
}

impl PricingEngine {
    /// Classifies the gap `[start, end)` as seen from `today`.
    ///
    /// Callers must pass `end > start`; the engine does not check it.
    pub fn analyze_gap(&self, start: NaiveDate, end: NaiveDate, today: NaiveDate) -> GapPeriod {
        debug_assert!(end > start, "gap must end after it starts");

        let nights = (end - start).num_days();
        let days_until = (start - today).num_days();
        if days_until < 0 {
            tracing::warn!(%start, %today, days_until, "Analyzing a gap that has already started.");
        }

        let (urgency, suggested_discount) = urgency_for(days_until);
        let target = target_segment(start, nights);

        tracing::debug!(%start, %end, nights, days_until, %urgency, %target, "Analyzed gap.");

        GapPeriod {
            start,
            end,
            nights,
            days_until,
            suggested_discount,
            target_segment: target,
            urgency,
        }
    }

    /// Discounted nightly price for a gap, off the property's base price.
    pub fn gap_offer(&self, gap: &GapPeriod) -> GapOffer {
        let base = self.property().base_price;
        GapOffer {
            discounted_price: (base * (Decimal::ONE - gap.suggested_discount)).round(),
            discount_percent: (gap.suggested_discount * dec!(100)).round(),
            urgency: gap.urgency,
            target_segment: gap.target_segment,
        }
    }
}
