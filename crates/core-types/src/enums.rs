use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Guest segments a listing or a promotion can be aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestType {
    Couple,
    Family,
    Business,
    Solo,
    Group,
}

impl GuestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestType::Couple => "couple",
            GuestType::Family => "family",
            GuestType::Business => "business",
            GuestType::Solo => "solo",
            GuestType::Group => "group",
        }
    }
}

impl fmt::Display for GuestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-item value content can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    EngagementRate,
    ClickThroughRate,
    ConversionRate,
    Views,
    Engagement,
    Clicks,
    Conversions,
    Shares,
    Comments,
    WordCount,
    TimeOnPage,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::EngagementRate => "engagement_rate",
            Metric::ClickThroughRate => "click_through_rate",
            Metric::ConversionRate => "conversion_rate",
            Metric::Views => "views",
            Metric::Engagement => "engagement",
            Metric::Clicks => "clicks",
            Metric::Conversions => "conversions",
            Metric::Shares => "shares",
            Metric::Comments => "comments",
            Metric::WordCount => "word_count",
            Metric::TimeOnPage => "time_on_page",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engagement_rate" => Ok(Metric::EngagementRate),
            "click_through_rate" | "ctr" => Ok(Metric::ClickThroughRate),
            "conversion_rate" => Ok(Metric::ConversionRate),
            "views" => Ok(Metric::Views),
            "engagement" => Ok(Metric::Engagement),
            "clicks" => Ok(Metric::Clicks),
            "conversions" => Ok(Metric::Conversions),
            "shares" => Ok(Metric::Shares),
            "comments" => Ok(Metric::Comments),
            "word_count" => Ok(Metric::WordCount),
            "time_on_page" => Ok(Metric::TimeOnPage),
            other => Err(CoreError::InvalidInput(
                "metric".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Which end of a ranking to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
    /// Highest values first.
    Top,
    /// Lowest values first.
    Worst,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_parses_snake_case_and_ctr_alias() {
        assert_eq!("engagement_rate".parse::<Metric>().unwrap(), Metric::EngagementRate);
        assert_eq!("CTR".parse::<Metric>().unwrap(), Metric::ClickThroughRate);
        assert_eq!(" views ".parse::<Metric>().unwrap(), Metric::Views);
        assert!("bounce_rate".parse::<Metric>().is_err());
    }

    #[test]
    fn guest_type_serializes_lowercase() {
        let json = serde_json::to_string(&GuestType::Business).unwrap();
        assert_eq!(json, "\"business\"");
        let back: GuestType = serde_json::from_str("\"family\"").unwrap();
        assert_eq!(back, GuestType::Family);
    }
}
