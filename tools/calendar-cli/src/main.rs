//! Destination Price Calendar CLI
//!
//! Terminal companion to the catalog editor:
//! - month: calendar view with price and flight-day badges
//! - day: every tier behind one calendar cell
//! - validate: data-quality report for each destination's tiers
//! - quote: exact totals for a multi-destination quote

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use price_calendar::date::parse_query_date;
use price_calendar::{CalendarConfig, CalendarMonth, PriceCalendarResolver};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trip_catalog::{price_quote, Catalog, QuoteRequest};

#[derive(Parser)]
#[command(name = "calendar-cli")]
#[command(about = "Price calendar, tier validation and quote pricing for the destination catalog")]
#[command(version)]
struct Cli {
    /// Destination catalog export (JSON)
    #[arg(short, long, default_value = "catalog.json")]
    catalog: PathBuf,

    /// Calendar configuration file (TOML); PRICE_CALENDAR_* variables are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of the terminal view
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calendar view for one or more destinations
    Month {
        /// Destination id, repeat for a combined itinerary
        #[arg(short, long = "destination", required = true)]
        destinations: Vec<String>,

        /// First visible month (YYYY-MM)
        #[arg(short, long)]
        start: String,

        /// Number of months to show (defaults to the configured view)
        #[arg(short, long)]
        months: Option<usize>,
    },

    /// Tiers, badge and tooltip for a single date
    Day {
        /// Destination id, repeat for a combined itinerary
        #[arg(short, long = "destination", required = true)]
        destinations: Vec<String>,

        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Report malformed dates, duplicates and off-policy flight days
    Validate {
        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Price a quote (legs as <destination-id>@<YYYY-MM-DD>)
    Quote {
        #[arg(short, long = "leg", required = true)]
        legs: Vec<String>,

        #[arg(short, long, default_value = "1")]
        passengers: u32,

        #[arg(long)]
        client: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let catalog = Catalog::load_from_file(&cli.catalog)
        .with_context(|| format!("Failed to load catalog from {:?}", cli.catalog))?;
    let resolver = PriceCalendarResolver::from_config(&config);

    match cli.command {
        Commands::Month { destinations, start, months } => {
            let first = CalendarMonth::parse(&start)?;
            let config = match months {
                Some(months) => config.with_months_visible(months)?,
                None => config,
            };
            let count = config.view.months_visible;
            let lists = catalog.tier_lists_for(&destinations)?;

            info!("Rendering {} months from {} for {:?}", count, first, destinations);
            let views = resolver.resolve_months(&lists, first, count);
            if cli.json {
                print_json(&views)?;
            } else {
                views.iter().for_each(render::print_month);
            }
        }
        Commands::Day { destinations, date } => {
            let date = parse_query_date(&date)?;
            let lists = catalog.tier_lists_for(&destinations)?;
            let cell = resolver.resolve_day(&lists, date);
            if cli.json {
                print_json(&cell)?;
            } else {
                render::print_day(&cell);
            }
        }
        Commands::Validate { strict } => {
            let reports = catalog.validate_all();
            let issue_count: usize = reports.iter().map(|(_, r)| r.issues.len()).sum();
            if cli.json {
                print_json(&reports)?;
            } else {
                for (id, report) in &reports {
                    render::print_report(id, report);
                }
            }
            if strict && issue_count > 0 {
                bail!("{} issues found across {} destinations", issue_count, reports.len());
            }
        }
        Commands::Quote { legs, passengers, client } => {
            let mut request = QuoteRequest::new(passengers);
            request.client_name = client;
            for leg in &legs {
                let (id, date) = leg.split_once('@').with_context(|| {
                    format!("Invalid leg '{leg}', expected <destination-id>@<YYYY-MM-DD>")
                })?;
                request = request.with_leg(id, parse_query_date(date)?);
            }

            let summary = price_quote(&catalog, &request, &resolver)?;
            if cli.json {
                print_json(&summary)?;
            } else {
                render::print_quote(&summary);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CalendarConfig> {
    match path {
        Some(path) => CalendarConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}")),
        None => CalendarConfig::from_env().context("Invalid PRICE_CALENDAR_* environment"),
    }
}
