use crate::benchmark::benchmark_for;
use crate::error::AnalyticsError;
use crate::insights::{Recommendation, Trend};
use crate::report::{ContentTypeStats, GroupStats, PerformanceReport};
use core_types::{ContentItem, Metric, RankDirection};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Bucket for items with a blank category.
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Bucket for items with a blank content type.
pub const OTHER_TYPE: &str = "other";

/// Second-half engagement must move by this factor to count as a trend.
const TREND_UP: Decimal = dec!(1.1);
const TREND_DOWN: Decimal = dec!(0.9);
/// One length bucket must beat the other by this factor.
const LENGTH_EDGE: Decimal = dec!(1.2);
const LONG_FORM_WORDS: u64 = 1000;
/// How many items the recommendation pass looks at on each end.
const RECOMMENDATION_SAMPLE: usize = 3;

/// A stateless calculator for content performance.
///
/// `top_n` and `rank_metric` only shape the top/worst lists of `analyze`;
/// every other operation takes its inputs explicitly.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    top_n: usize,
    rank_metric: Metric,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self {
            top_n: 5,
            rank_metric: Metric::EngagementRate,
        }
    }
}

impl AnalyticsEngine {
    pub fn new(top_n: usize, rank_metric: Metric) -> Self {
        Self { top_n, rank_metric }
    }

    /// The main entry point: computes a full `PerformanceReport`.
    ///
    /// # Errors
    ///
    /// `AnalyticsError::EmptyInput` when `items` is empty.
    pub fn analyze(&self, items: &[ContentItem]) -> Result<PerformanceReport, AnalyticsError> {
        if items.is_empty() {
            return Err(AnalyticsError::EmptyInput("no content data loaded"));
        }

        let dates: Vec<&str> = items
            .iter()
            .map(|i| i.publish_date.as_str())
            .filter(|d| !d.is_empty())
            .collect();
        let date_range = match (dates.iter().min(), dates.iter().max()) {
            (Some(first), Some(last)) => Some((first.to_string(), last.to_string())),
            _ => None,
        };

        let report = PerformanceReport {
            total_content: items.len(),
            date_range,
            total_views: items.iter().map(|i| i.views).sum(),
            total_engagement: items.iter().map(|i| i.engagement).sum(),
            total_clicks: items.iter().map(|i| i.clicks).sum(),
            total_conversions: items.iter().map(|i| i.conversions).sum(),
            avg_views: mean(items.iter().map(|i| Decimal::from(i.views))),
            avg_engagement_rate: mean(items.iter().map(ContentItem::engagement_rate)),
            avg_ctr: mean(items.iter().map(ContentItem::click_through_rate)),
            avg_conversion_rate: mean(items.iter().map(ContentItem::conversion_rate)),
            top_performers: cloned(self.rank(items, self.rank_metric, self.top_n, RankDirection::Top)),
            worst_performers: cloned(self.rank(
                items,
                self.rank_metric,
                self.top_n,
                RankDirection::Worst,
            )),
            by_category: self.by_category(items)?,
            by_content_type: self.by_content_type(items)?,
            trends: self.detect_trends(items),
            recommendations: self.recommend(items),
        };

        tracing::info!(
            items = report.total_content,
            categories = report.by_category.len(),
            content_types = report.by_content_type.len(),
            trends = report.trends.len(),
            "Content performance analyzed."
        );

        Ok(report)
    }

    /// Groups items by an arbitrary key and averages each group.
    ///
    /// Items whose key is blank land in `fallback` rather than being dropped.
    pub fn group_by<F>(
        &self,
        items: &[ContentItem],
        key: F,
        fallback: &str,
    ) -> Result<BTreeMap<String, GroupStats>, AnalyticsError>
    where
        F: Fn(&ContentItem) -> &str,
    {
        if items.is_empty() {
            return Err(AnalyticsError::EmptyInput("cannot average an empty collection"));
        }

        Ok(partition(items, key, fallback)
            .into_iter()
            .map(|(name, group)| {
                let stats = GroupStats {
                    count: group.len(),
                    avg_views: mean(group.iter().map(|i| Decimal::from(i.views))),
                    avg_engagement_rate: mean(group.iter().map(|i| i.engagement_rate())),
                    avg_ctr: mean(group.iter().map(|i| i.click_through_rate())),
                    total_views: group.iter().map(|i| i.views).sum(),
                };
                (name, stats)
            })
            .collect())
    }

    /// Per-category averages; blank categories are reported as `Uncategorized`.
    pub fn by_category(
        &self,
        items: &[ContentItem],
    ) -> Result<BTreeMap<String, GroupStats>, AnalyticsError> {
        self.group_by(items, |i| i.category.as_str(), UNCATEGORIZED)
    }

    /// Per-content-type averages with a benchmark verdict on engagement.
    pub fn by_content_type(
        &self,
        items: &[ContentItem],
    ) -> Result<BTreeMap<String, ContentTypeStats>, AnalyticsError> {
        if items.is_empty() {
            return Err(AnalyticsError::EmptyInput("cannot average an empty collection"));
        }

        Ok(partition(items, |i| i.content_type.as_str(), OTHER_TYPE)
            .into_iter()
            .map(|(name, group)| {
                let avg_engagement_rate = mean(group.iter().map(|i| i.engagement_rate()));
                let stats = ContentTypeStats {
                    count: group.len(),
                    avg_views: mean(group.iter().map(|i| Decimal::from(i.views))),
                    avg_engagement_rate,
                    benchmark_status: benchmark_for(&name).classify(avg_engagement_rate),
                };
                (name, stats)
            })
            .collect())
    }

    /// The first `n` items ordered by `metric`.
    ///
    /// The sort is stable: items with equal values keep their input order.
    pub fn rank<'a>(
        &self,
        items: &'a [ContentItem],
        metric: Metric,
        n: usize,
        direction: RankDirection,
    ) -> Vec<&'a ContentItem> {
        let mut ranked: Vec<(&ContentItem, Decimal)> =
            items.iter().map(|i| (i, i.metric(metric))).collect();
        match direction {
            RankDirection::Top => ranked.sort_by(|a, b| b.1.cmp(&a.1)),
            RankDirection::Worst => ranked.sort_by(|a, b| a.1.cmp(&b.1)),
        }
        ranked.into_iter().take(n).map(|(i, _)| i).collect()
    }

    /// Compares engagement between the older and newer half of the items, and
    /// short against long content when word counts are known.
    pub fn detect_trends(&self, items: &[ContentItem]) -> Vec<Trend> {
        if items.len() < 3 {
            return vec![Trend::InsufficientData];
        }

        let mut trends = Vec::new();

        let mut by_date: Vec<&ContentItem> = items.iter().collect();
        by_date.sort_by(|a, b| a.publish_date.cmp(&b.publish_date));
        // Odd counts put the extra item in the newer half.
        let (older, newer) = by_date.split_at(by_date.len() / 2);

        let first = mean(older.iter().map(|i| i.engagement_rate()));
        let second = mean(newer.iter().map(|i| i.engagement_rate()));

        // The strict comparisons keep an all-zero series from reading as a move.
        if second >= first * TREND_UP && second > first {
            trends.push(Trend::EngagementUp {
                from: first,
                to: second,
            });
        } else if second <= first * TREND_DOWN && second < first {
            trends.push(Trend::EngagementDown {
                from: first,
                to: second,
            });
        } else {
            trends.push(Trend::EngagementStable {
                average: (first + second) / dec!(2),
            });
        }

        let (short, long): (Vec<&ContentItem>, Vec<&ContentItem>) = items
            .iter()
            .filter(|i| i.word_count > 0)
            .partition(|i| i.word_count < LONG_FORM_WORDS);

        if !short.is_empty() && !long.is_empty() {
            let short_avg = mean(short.iter().map(|i| i.engagement_rate()));
            let long_avg = mean(long.iter().map(|i| i.engagement_rate()));

            if long_avg >= short_avg * LENGTH_EDGE && long_avg > short_avg {
                trends.push(Trend::LongFormOutperforms);
            } else if short_avg >= long_avg * LENGTH_EDGE && short_avg > long_avg {
                trends.push(Trend::ShortFormOutperforms);
            }
        }

        tracing::debug!(?trends, "Trend detection finished.");
        trends
    }

    /// Derives next steps from the top and worst three items by engagement
    /// rate and from the category breakdown. Empty input yields no advice.
    pub fn recommend(&self, items: &[ContentItem]) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        if items.is_empty() {
            return recommendations;
        }

        let top = self.rank(
            items,
            Metric::EngagementRate,
            RECOMMENDATION_SAMPLE,
            RankDirection::Top,
        );
        if let Some(content_type) = most_frequent_type(&top) {
            recommendations.push(Recommendation::CreateMoreOfType { content_type });
        }

        if let Ok(by_category) = self.by_category(items) {
            let mut best: Option<(&String, &GroupStats)> = None;
            for (name, stats) in &by_category {
                if best.is_none_or(|(_, b)| stats.avg_engagement_rate > b.avg_engagement_rate) {
                    best = Some((name, stats));
                }
            }
            if let Some((category, stats)) = best {
                recommendations.push(Recommendation::DoubleDownOnCategory {
                    category: category.clone(),
                    avg_engagement_rate: stats.avg_engagement_rate,
                });
            }
        }

        let worst = self.rank(
            items,
            Metric::EngagementRate,
            RECOMMENDATION_SAMPLE,
            RankDirection::Worst,
        );
        recommendations.push(Recommendation::ExperimentWithFormat {
            avg_views: mean(worst.iter().map(|i| Decimal::from(i.views))),
        });

        recommendations
    }
}

/// Most common content type among `ranked`; on a tie, the type that shows up
/// first in ranking order wins.
fn most_frequent_type(ranked: &[&ContentItem]) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for item in ranked {
        let label = label_or(&item.content_type, OTHER_TYPE);
        let count = ranked
            .iter()
            .filter(|other| label_or(&other.content_type, OTHER_TYPE) == label)
            .count();
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label.to_string())
}

fn partition<'a, F>(
    items: &'a [ContentItem],
    key: F,
    fallback: &str,
) -> BTreeMap<String, Vec<&'a ContentItem>>
where
    F: Fn(&ContentItem) -> &str,
{
    let mut groups: BTreeMap<String, Vec<&ContentItem>> = BTreeMap::new();
    for item in items {
        groups
            .entry(label_or(key(item), fallback).to_string())
            .or_default()
            .push(item);
    }
    groups
}

fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Arithmetic mean; zero for an empty sequence.
fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let (sum, count) = values.fold((Decimal::ZERO, 0u64), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        return Decimal::ZERO;
    }
    sum / Decimal::from(count)
}

fn cloned(items: Vec<&ContentItem>) -> Vec<ContentItem> {
    items.into_iter().cloned().collect()
}
