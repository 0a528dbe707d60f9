use analytics::{BenchmarkStatus, PerformanceReport};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use core_types::{ContentItem, Metric, Property};
use pricing::{GapOffer, GapPeriod, PriceQuote, Urgency};
use rust_decimal::Decimal;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        header
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

fn euros(amount: Decimal) -> String {
    format!("€{amount}")
}

fn factor(value: Decimal) -> String {
    format!("×{}", value.normalize())
}

/// Two-column breakdown of a single night's price.
pub fn quote_table(property: &Property, quote: &PriceQuote) -> Table {
    let events = if quote.events.is_empty() {
        "-".to_string()
    } else {
        quote.events.join(", ")
    };

    let mut table = new_table(&["Field", "Value"]);
    table
        .add_row(vec![Cell::new("Property"), Cell::new(&property.name)])
        .add_row(vec![
            Cell::new("Date"),
            Cell::new(quote.date.format("%a %Y-%m-%d").to_string()),
        ])
        .add_row(vec![Cell::new("Base price"), Cell::new(euros(quote.base_price))])
        .add_row(vec![
            Cell::new("Season"),
            Cell::new(format!("{} ({})", quote.season, factor(quote.seasonal_multiplier))),
        ])
        .add_row(vec![Cell::new("Day of week"), Cell::new(factor(quote.dow_multiplier))])
        .add_row(vec![
            Cell::new("Events"),
            Cell::new(format!("{events} ({})", factor(quote.event_multiplier))),
        ])
        .add_row(vec![
            Cell::new("Suggested").fg(Color::Green),
            Cell::new(euros(quote.suggested_price)).fg(Color::Green),
        ])
        .add_row(vec![
            Cell::new("Band"),
            Cell::new(format!("{} - {}", euros(quote.min_price), euros(quote.max_price))),
        ]);
    table
}

pub fn calendar_table(quotes: &[PriceQuote]) -> Table {
    let mut table = new_table(&["Date", "Season", "Events", "Suggested", "Min", "Max"]);
    for quote in quotes {
        let color = if quote.event_multiplier > Decimal::ONE {
            Color::Yellow
        } else {
            Color::Reset
        };
        table.add_row(vec![
            Cell::new(quote.date.format("%a %Y-%m-%d").to_string()),
            Cell::new(quote.season.to_string()),
            Cell::new(quote.events.join(", ")).fg(color),
            Cell::new(euros(quote.suggested_price)),
            Cell::new(euros(quote.min_price)),
            Cell::new(euros(quote.max_price)),
        ]);
    }
    table
}

pub fn gap_table(property: &Property, gap: &GapPeriod, offer: &GapOffer) -> Table {
    let urgency_color = match gap.urgency {
        Urgency::Critical => Color::Red,
        Urgency::High => Color::Yellow,
        Urgency::Medium => Color::White,
        Urgency::Low => Color::DarkGrey,
    };

    let mut table = new_table(&["Field", "Value"]);
    table
        .add_row(vec![
            Cell::new("Gap"),
            Cell::new(format!("{} → {} ({} nights)", gap.start, gap.end, gap.nights)),
        ])
        .add_row(vec![Cell::new("Days until"), Cell::new(gap.days_until)])
        .add_row(vec![
            Cell::new("Urgency"),
            Cell::new(gap.urgency.to_string()).fg(urgency_color),
        ])
        .add_row(vec![Cell::new("Target"), Cell::new(gap.target_segment.to_string())])
        .add_row(vec![
            Cell::new("Discount"),
            Cell::new(format!("{}%", offer.discount_percent)),
        ])
        .add_row(vec![
            Cell::new("Offer").fg(Color::Green),
            Cell::new(format!(
                "{} (was {})",
                euros(offer.discounted_price),
                euros(property.base_price)
            ))
            .fg(Color::Green),
        ]);
    table
}

fn performers_table(items: &[ContentItem], metric: Metric) -> Table {
    let mut table = new_table(&["Title", "Type", "Category", metric.as_str()]);
    for item in items {
        table.add_row(vec![
            Cell::new(&item.title),
            Cell::new(&item.content_type),
            Cell::new(&item.category),
            Cell::new(item.metric(metric).round_dp(2)),
        ]);
    }
    table
}

/// Prints every section of a report, one table each.
pub fn print_report(report: &PerformanceReport, metric: Metric) {
    let mut summary = new_table(&["Summary", "Value"]);
    summary.add_row(vec![Cell::new("Items"), Cell::new(report.total_content)]);
    if let Some((first, last)) = &report.date_range {
        summary.add_row(vec![Cell::new("Period"), Cell::new(format!("{first} → {last}"))]);
    }
    summary
        .add_row(vec![Cell::new("Total views"), Cell::new(report.total_views)])
        .add_row(vec![Cell::new("Avg views"), Cell::new(report.avg_views.round_dp(2))])
        .add_row(vec![
            Cell::new("Avg engagement rate"),
            Cell::new(format!("{}%", report.avg_engagement_rate.round_dp(2))),
        ])
        .add_row(vec![
            Cell::new("Avg CTR"),
            Cell::new(format!("{}%", report.avg_ctr.round_dp(2))),
        ])
        .add_row(vec![
            Cell::new("Avg conversion rate"),
            Cell::new(format!("{}%", report.avg_conversion_rate.round_dp(2))),
        ]);
    println!("{summary}");

    println!("\nTop performers");
    println!("{}", performers_table(&report.top_performers, metric));
    println!("\nNeeds attention");
    println!("{}", performers_table(&report.worst_performers, metric));

    let mut categories = new_table(&["Category", "Count", "Avg views", "Avg eng. rate", "Avg CTR"]);
    for (name, stats) in &report.by_category {
        categories.add_row(vec![
            Cell::new(name),
            Cell::new(stats.count),
            Cell::new(stats.avg_views.round_dp(2)),
            Cell::new(format!("{}%", stats.avg_engagement_rate.round_dp(2))),
            Cell::new(format!("{}%", stats.avg_ctr.round_dp(2))),
        ]);
    }
    println!("\n{categories}");

    let mut types = new_table(&["Content type", "Count", "Avg views", "Avg eng. rate", "Benchmark"]);
    for (name, stats) in &report.by_content_type {
        let color = match stats.benchmark_status {
            BenchmarkStatus::Great => Color::Green,
            BenchmarkStatus::Good => Color::White,
            BenchmarkStatus::BelowBenchmark => Color::Red,
        };
        types.add_row(vec![
            Cell::new(name),
            Cell::new(stats.count),
            Cell::new(stats.avg_views.round_dp(2)),
            Cell::new(format!("{}%", stats.avg_engagement_rate.round_dp(2))),
            Cell::new(stats.benchmark_status.to_string()).fg(color),
        ]);
    }
    println!("\n{types}");

    println!("\nTrends");
    for trend in &report.trends {
        println!("  - {trend}");
    }
    println!("\nRecommendations");
    for recommendation in &report.recommendations {
        println!("  - {recommendation}");
    }
}
