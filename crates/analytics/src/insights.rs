use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A directional signal found in the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trend {
    /// Fewer than three items; no other trend is reported.
    InsufficientData,
    EngagementUp { from: Decimal, to: Decimal },
    EngagementDown { from: Decimal, to: Decimal },
    /// Within ±10%; `average` is the midpoint of both halves.
    EngagementStable { average: Decimal },
    LongFormOutperforms,
    ShortFormOutperforms,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::InsufficientData => write!(f, "Insufficient data for trend analysis"),
            Trend::EngagementUp { from, to } => {
                write!(f, "Engagement trending UP: {from:.1}% → {to:.1}%")
            }
            Trend::EngagementDown { from, to } => {
                write!(f, "Engagement trending DOWN: {from:.1}% → {to:.1}%")
            }
            Trend::EngagementStable { average } => write!(f, "Engagement stable: ~{average:.1}%"),
            Trend::LongFormOutperforms => {
                write!(f, "Long-form content (1000+ words) outperforms short content")
            }
            Trend::ShortFormOutperforms => {
                write!(f, "Short-form content (<1000 words) outperforms long content")
            }
        }
    }
}

/// An actionable next step derived from rankings and category averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recommendation {
    /// The type that dominates the top performers.
    CreateMoreOfType { content_type: String },
    /// The category with the best mean engagement rate.
    DoubleDownOnCategory {
        category: String,
        avg_engagement_rate: Decimal,
    },
    /// Mean views of the worst performers, as the baseline to beat.
    ExperimentWithFormat { avg_views: Decimal },
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::CreateMoreOfType { content_type } => write!(
                f,
                "Quick Win: Create more {content_type} content - your top performers are this type"
            ),
            Recommendation::DoubleDownOnCategory {
                category,
                avg_engagement_rate,
            } => write!(
                f,
                "Strategic: Double down on '{category}' category ({avg_engagement_rate:.1}% avg engagement)"
            ),
            Recommendation::ExperimentWithFormat { avg_views } => write!(
                f,
                "Experiment: Test different headlines/formats for low performers (avg {avg_views:.0} views)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn insufficient_data_wording() {
        assert_eq!(
            Trend::InsufficientData.to_string(),
            "Insufficient data for trend analysis"
        );
    }

    #[test]
    fn rates_render_with_one_decimal() {
        let t = Trend::EngagementUp {
            from: dec!(4.2),
            to: dec!(7),
        };
        assert_eq!(t.to_string(), "Engagement trending UP: 4.2% → 7.0%");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let r = Recommendation::CreateMoreOfType {
            content_type: "video".to_string(),
        };
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["kind"], "create_more_of_type");
        assert_eq!(json["content_type"], "video");
    }
}
