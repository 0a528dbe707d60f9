use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// Engagement-rate thresholds (in percent) for a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub good: Decimal,
    pub great: Decimal,
}

pub const BENCHMARKS: [(&str, Benchmark); 4] = [
    ("blog_post", Benchmark { good: dec!(2.0), great: dec!(5.0) }),
    ("social_media", Benchmark { good: dec!(1.0), great: dec!(5.0) }),
    ("video", Benchmark { good: dec!(3.0), great: dec!(8.0) }),
    ("newsletter", Benchmark { good: dec!(15.0), great: dec!(30.0) }),
];

/// Used for any content type missing from `BENCHMARKS`.
pub const DEFAULT_BENCHMARK: Benchmark = Benchmark {
    good: dec!(2.0),
    great: dec!(5.0),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Great,
    Good,
    BelowBenchmark,
}

impl fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BenchmarkStatus::Great => "great",
            BenchmarkStatus::Good => "good",
            BenchmarkStatus::BelowBenchmark => "below_benchmark",
        })
    }
}

pub fn benchmark_for(content_type: &str) -> Benchmark {
    BENCHMARKS
        .iter()
        .find(|(name, _)| *name == content_type)
        .map(|(_, b)| *b)
        .unwrap_or(DEFAULT_BENCHMARK)
}

impl Benchmark {
    pub fn classify(&self, avg_engagement_rate: Decimal) -> BenchmarkStatus {
        if avg_engagement_rate >= self.great {
            BenchmarkStatus::Great
        } else if avg_engagement_rate >= self.good {
            BenchmarkStatus::Good
        } else {
            BenchmarkStatus::BelowBenchmark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_types() {
        assert_eq!(benchmark_for("newsletter").great, dec!(30));
        assert_eq!(benchmark_for("podcast"), DEFAULT_BENCHMARK);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let video = benchmark_for("video");
        assert_eq!(video.classify(dec!(8)), BenchmarkStatus::Great);
        assert_eq!(video.classify(dec!(3)), BenchmarkStatus::Good);
        assert_eq!(video.classify(dec!(2.99)), BenchmarkStatus::BelowBenchmark);
    }
}
