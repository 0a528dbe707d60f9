use analytics::AnalyticsEngine;
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use configuration::Settings;
use core_types::Metric;
use pricing::{EventCatalog, PricingEngine};
use serde::Serialize;
use std::path::PathBuf;

mod render;

/// The main entry point for the rental and content insights toolkit.
fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => configuration::load_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => configuration::load_config().context("Failed to load configuration")?,
    };

    // Keep the guard alive for the whole run so file logs are flushed on exit.
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Price(args) => handle_price(args, &settings, cli.json),
        Commands::Calendar(args) => handle_calendar(args, &settings, cli.json),
        Commands::Gap(args) => handle_gap(args, &settings, cli.json),
        Commands::Analyze(args) => handle_analyze(args, &settings, cli.json),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Dynamic nightly pricing for a short-term rental, and performance reports
/// for the content that markets it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to ./config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the suggested nightly price for one date.
    Price(PriceArgs),
    /// Quote every night in an inclusive date range.
    Calendar(CalendarArgs),
    /// Classify an unbooked gap and compute its last-minute offer.
    Gap(GapArgs),
    /// Build a performance report from a CSV or JSON export.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct PriceArgs {
    /// The night to price (format: YYYY-MM-DD).
    #[arg(long)]
    date: NaiveDate,
}

#[derive(Parser)]
struct CalendarArgs {
    /// First night (format: YYYY-MM-DD).
    #[arg(long)]
    from: NaiveDate,

    /// Last night, inclusive (format: YYYY-MM-DD).
    #[arg(long)]
    to: NaiveDate,
}

#[derive(Parser)]
struct GapArgs {
    /// Check-in date of the gap (format: YYYY-MM-DD).
    #[arg(long)]
    start: NaiveDate,

    /// Check-out date of the gap (format: YYYY-MM-DD).
    #[arg(long)]
    end: NaiveDate,

    /// Reference date for urgency; defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Content export to read. Files ending in `.json` are parsed as JSON, anything else as CSV.
    file: PathBuf,

    /// How many top and worst performers to list (overrides `analytics.top_n`).
    #[arg(long)]
    top: Option<usize>,

    /// Metric used to rank performers (overrides `analytics.rank_metric`).
    #[arg(long)]
    metric: Option<Metric>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Builds the pricing engine from the `[property]` and `[pricing]` sections.
fn build_pricing_engine(settings: &Settings) -> Result<PricingEngine> {
    let property = settings.property()?.clone();

    let base = if settings.pricing.use_default_catalog {
        EventCatalog::rome_2025()?
    } else {
        EventCatalog::empty()
    };
    let catalog = base
        .extended(settings.pricing.events.clone())
        .context("Invalid event in [pricing.events]")?;

    tracing::info!(
        property = %property.name,
        base_price = %property.base_price,
        events = catalog.len(),
        "Loaded property and event catalog."
    );
    Ok(PricingEngine::new(property, catalog)?)
}

fn handle_price(args: PriceArgs, settings: &Settings, json: bool) -> Result<()> {
    let engine = build_pricing_engine(settings)?;
    let quote = engine.price_for(args.date);

    if json {
        return print_json(&quote);
    }
    println!("{}", render::quote_table(engine.property(), &quote));
    Ok(())
}

fn handle_calendar(args: CalendarArgs, settings: &Settings, json: bool) -> Result<()> {
    if args.to < args.from {
        bail!("--to ({}) must not be before --from ({})", args.to, args.from);
    }

    let engine = build_pricing_engine(settings)?;
    let quotes = engine.price_calendar(args.from, args.to);

    if json {
        return print_json(&quotes);
    }
    println!("{}", render::calendar_table(&quotes));
    Ok(())
}

fn handle_gap(args: GapArgs, settings: &Settings, json: bool) -> Result<()> {
    if args.end <= args.start {
        bail!("--end ({}) must be after --start ({})", args.end, args.start);
    }

    let engine = build_pricing_engine(settings)?;
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let gap = engine.analyze_gap(args.start, args.end, today);
    let offer = engine.gap_offer(&gap);

    if json {
        #[derive(Serialize)]
        struct GapOutput<'a> {
            gap: &'a pricing::GapPeriod,
            offer: &'a pricing::GapOffer,
        }
        return print_json(&GapOutput {
            gap: &gap,
            offer: &offer,
        });
    }
    println!("{}", render::gap_table(engine.property(), &gap, &offer));
    Ok(())
}

fn handle_analyze(args: AnalyzeArgs, settings: &Settings, json: bool) -> Result<()> {
    let items = ingest::load_path(&args.file)
        .with_context(|| format!("Failed to read content from {}", args.file.display()))?;

    let analytics = settings
        .analytics
        .with_overrides(args.top, args.metric)
        .context("Invalid --top or --metric")?;
    let metric = analytics.rank_metric;
    let engine = AnalyticsEngine::new(analytics.top_n, metric);
    let report = engine
        .analyze(&items)
        .with_context(|| format!("Cannot build a report from {}", args.file.display()))?;

    if json {
        return print_json(&report);
    }
    render::print_report(&report, metric);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
