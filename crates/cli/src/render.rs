//! Terminal rendering for recommendations, festivals and highlights.

use anyhow::Result;
use catalog::{BudgetRange, Festival};
use colored::{ColoredString, Colorize};
use engine::{Recommendation, RecommendationKind, SeasonalHighlights};
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn budget_badge(range: BudgetRange) -> ColoredString {
    match range {
        BudgetRange::BudgetFriendly => range.as_str().green(),
        BudgetRange::Moderate => range.as_str().yellow(),
        BudgetRange::Expensive => range.as_str().red(),
    }
}

fn optional_badge(range: Option<BudgetRange>) -> String {
    range.map(|r| budget_badge(r).to_string()).unwrap_or_default()
}

/// Numbered list of recommendations, notices shown with their suggestion
pub fn print_recommendations(recommendations: &[Recommendation], duration_days: u32) {
    println!("{}", "Trip Recommendations:".bold().blue());
    if recommendations.is_empty() {
        println!("  No recommendations match these preferences.");
        return;
    }

    for (i, rec) in recommendations.iter().enumerate() {
        let rank = (i + 1).to_string();
        match &rec.kind {
            RecommendationKind::Notice { suggestion } => {
                println!("{}. {} {}", rank.yellow(), "ℹ".yellow(), rec.title.bold());
                println!("   {}", rec.description);
                println!("   {} {}", "Tip:".cyan(), suggestion);
            }
            RecommendationKind::Festival { country } => {
                println!(
                    "{}. {} ({}) [{}]",
                    rank.green(),
                    rec.title.bold(),
                    country,
                    optional_badge(rec.budget_range)
                );
                println!("   {}", rec.description);
                print_cost(rec.estimated_cost, duration_days);
            }
            RecommendationKind::Destination { countries } => {
                println!(
                    "{}. {} ({}) [{}]",
                    rank.green(),
                    rec.title.bold(),
                    countries.join(", "),
                    optional_badge(rec.budget_range)
                );
                println!("   {}", rec.description);
                print_cost(rec.estimated_cost, duration_days);
            }
        }
    }
}

fn print_cost(cost: u64, duration_days: u32) {
    println!(
        "   {} ~${} for {} days",
        "Estimated cost:".cyan(),
        cost,
        duration_days
    );
}

pub fn print_festivals<'a>(heading: &str, festivals: impl IntoIterator<Item = &'a Festival>) {
    println!("{}", heading.bold().blue());
    let mut shown = 0;
    for festival in festivals {
        shown += 1;
        println!(
            "{} {} ({}) [{}]: {}",
            "•".green(),
            festival.name.bold(),
            festival.country,
            budget_badge(festival.budget_range),
            festival.description
        );
    }
    if shown == 0 {
        println!("  No festivals found.");
    }
}

pub fn print_highlights(month: &str, highlights: &SeasonalHighlights) {
    print_festivals(
        &format!("Seasonal highlights for {}:", month),
        highlights.festivals,
    );
    println!("{} {}", "Weather:".cyan(), highlights.weather_tips);
    println!("{} {}", "Travel:".cyan(), highlights.travel_tips);
}

pub fn print_specialties(country: &str, specialties: &[&str]) {
    println!(
        "{} {}",
        format!("Known for in {}:", country).cyan(),
        specialties.join(", ")
    );
}
