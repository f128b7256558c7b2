mod interactive;
mod render;

use anyhow::{Context, Result, anyhow};
use catalog::{BudgetCategory, BudgetRange, Catalog, Festival, Month, Season};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use engine::{Preferences, RecommendationEngine, normalize_country};
use interactive::{Session, SessionEnd};
use pipeline::{cost_bounds, estimate_cost_for_label};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// Trip Planner - festival and destination recommendations
#[derive(Parser)]
#[command(name = "trip-planner")]
#[command(about = "Recommends festivals and destination packages for a trip", long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get trip recommendations (at most 2 festivals and 1 destination)
    Recommend {
        /// Travel month, e.g. March
        #[arg(long)]
        month: Option<String>,

        /// Budget tier: budget, moderate or luxury
        #[arg(long)]
        budget: Option<BudgetCategory>,

        /// Trip length in days
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,

        /// City or country, e.g. London or England
        #[arg(long)]
        country: Option<String>,

        /// Print recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// List festivals from the catalog
    Festivals {
        #[command(flatten)]
        query: FestivalQuery,

        /// Print festivals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show festivals, weather and travel tips for a month
    Highlights {
        #[arg(long)]
        month: String,
    },

    /// Resolve a city or country name to its canonical country
    Normalize {
        text: String,
    },

    /// Estimate trip cost for a budget range
    Estimate {
        /// budget-friendly, moderate or expensive
        #[arg(long)]
        range: String,

        /// Trip length in days
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
    },

    /// Start the interactive menu
    Interactive,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of worker threads
        #[arg(long, default_value = "4")]
        concurrent: usize,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct FestivalQuery {
    /// Festivals in a month
    #[arg(long)]
    month: Option<String>,

    /// Festivals in a city or country
    #[arg(long)]
    country: Option<String>,

    /// Festivals in a season: spring, summer, autumn or winter
    #[arg(long)]
    season: Option<String>,

    /// All budget-friendly festivals
    #[arg(long)]
    budget_friendly: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let fallback = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = RecommendationEngine::new();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            month,
            budget,
            days,
            country,
            json,
        } => handle_recommend(&engine, month, budget, days, country, json)?,
        Commands::Festivals { query, json } => handle_festivals(engine.catalog(), query, json)?,
        Commands::Highlights { month } => handle_highlights(&engine, &month),
        Commands::Normalize { text } => handle_normalize(&text),
        Commands::Estimate { range, days } => handle_estimate(&range, days),
        Commands::Interactive => {
            if Session::new(engine).run().await? == SessionEnd::Interrupted {
                // The stdin reader thread is still blocked; don't wait for it
                std::process::exit(0);
            }
        }
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(&engine, requests, concurrent)?,
    }

    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    engine: &RecommendationEngine,
    month: Option<String>,
    budget: Option<BudgetCategory>,
    days: u32,
    country: Option<String>,
    json: bool,
) -> Result<()> {
    let preferences = Preferences {
        travel_month: month,
        budget_category: budget,
        duration_days: Some(days),
        preferred_country: country,
    };

    let recommendations = engine
        .recommend(&preferences)
        .context("Failed to build recommendations")?;

    if json {
        render::print_json(&recommendations)
    } else {
        render::print_recommendations(&recommendations, days);
        Ok(())
    }
}

/// Handle the 'festivals' command
fn handle_festivals(catalog: &Catalog, query: FestivalQuery, json: bool) -> Result<()> {
    let (heading, festivals): (String, Vec<&Festival>) = if let Some(month) = query.month {
        let month = month.parse::<Month>()?;
        (
            format!("Festivals in {}:", month),
            catalog.festivals_in_month(month).iter().collect(),
        )
    } else if let Some(country) = query.country {
        let country =
            normalize_country(&country).ok_or_else(|| anyhow!("Country must not be empty"))?;
        let festivals = catalog.festivals_by_country(&country);
        (format!("Festivals in {}:", country), festivals)
    } else if let Some(season) = query.season {
        let season = season.parse::<Season>()?;
        (
            format!("Festivals in {}:", season),
            catalog.festivals_by_season(season.as_str()),
        )
    } else {
        (
            "Budget-friendly festivals:".to_string(),
            catalog.budget_friendly_festivals(),
        )
    };

    info!("Listing {} festivals", festivals.len());
    if json {
        render::print_json(&festivals)
    } else {
        render::print_festivals(&heading, festivals);
        Ok(())
    }
}

/// Handle the 'highlights' command
fn handle_highlights(engine: &RecommendationEngine, month: &str) {
    let month = month.trim();
    let highlights = engine.seasonal_highlights(month);
    render::print_highlights(month, &highlights);
}

/// Handle the 'normalize' command
fn handle_normalize(text: &str) {
    match normalize_country(text) {
        Some(country) => println!("{} {}", "✓".green(), country),
        None => println!("{} No location given", "✗".red()),
    }
}

/// Handle the 'estimate' command
fn handle_estimate(range: &str, days: u32) {
    let cost = estimate_cost_for_label(range, days);
    println!("{} ~${} for {} days", "Estimated cost:".cyan(), cost, days);

    match range.parse::<BudgetRange>() {
        Ok(range) => {
            let (min, max) = cost_bounds(range, days);
            println!("{} ${} - ${}", "Possible range:".cyan(), min, max);
        }
        Err(err) => println!("{} {} (using the default daily rate)", "!".yellow(), err),
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(engine: &RecommendationEngine, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("Benchmark needs at least one request"));
    }

    // Random preference mixes
    let mut rng = rand::rng();
    let countries = ["UK", "London", "Tokyo", "Bangkok", "Mars", "england", "Paris"];
    let workload: Vec<Preferences> = (0..requests)
        .map(|_| Preferences {
            travel_month: Month::ALL.choose(&mut rng).map(|m| m.as_str().to_string()),
            budget_category: BudgetCategory::ALL.choose(&mut rng).copied(),
            duration_days: Some(rng.random_range(1..=21)),
            preferred_country: countries.choose(&mut rng).map(|c| c.to_string()),
        })
        .collect();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(concurrent.max(1))
        .build()
        .context("Failed to build benchmark thread pool")?;

    let start = Instant::now();
    let mut timings = pool.install(|| {
        workload
            .par_iter()
            .map(|preferences| {
                let started = Instant::now();
                engine.recommend(preferences)?;
                Ok(started.elapsed())
            })
            .collect::<Result<Vec<Duration>>>()
    })?;
    let total_time = start.elapsed();

    // Latency statistics
    let summed: Duration = timings.iter().sum();
    let avg_latency = summed / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p) as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} on {} threads", requests, concurrent.max(1));
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}
