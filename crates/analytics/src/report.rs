use crate::benchmark::BenchmarkStatus;
use crate::insights::{Recommendation, Trend};
use core_types::ContentItem;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Averages for one group of items (a category, or any caller-chosen key).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub count: usize,
    pub avg_views: Decimal,
    pub avg_engagement_rate: Decimal,
    pub avg_ctr: Decimal,
    pub total_views: u64,
}

/// Averages for one content type, judged against its engagement benchmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTypeStats {
    pub count: usize,
    pub avg_views: Decimal,
    pub avg_engagement_rate: Decimal,
    pub benchmark_status: BenchmarkStatus,
}

/// A full snapshot of how a collection of content performed.
///
/// Built fresh by `AnalyticsEngine::analyze`; nothing is carried over between
/// calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    // I. Volume
    pub total_content: usize,
    /// Earliest and latest non-empty publish dates, if any item has one.
    pub date_range: Option<(String, String)>,
    pub total_views: u64,
    pub total_engagement: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,

    // II. Averages
    pub avg_views: Decimal,
    pub avg_engagement_rate: Decimal,
    pub avg_ctr: Decimal,
    pub avg_conversion_rate: Decimal,

    // III. Rankings
    pub top_performers: Vec<ContentItem>,
    pub worst_performers: Vec<ContentItem>,

    // IV. Breakdowns
    pub by_category: BTreeMap<String, GroupStats>,
    pub by_content_type: BTreeMap<String, ContentTypeStats>,

    // V. Signals
    pub trends: Vec<Trend>,
    pub recommendations: Vec<Recommendation>,
}
