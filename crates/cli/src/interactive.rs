//! Menu-driven interactive session.
//!
//! Stdin is read on a blocking thread so Ctrl-C can interrupt a pending
//! prompt. EOF and Ctrl-C both end the session.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use catalog::{BudgetCategory, Month, normalize_country};
use colored::Colorize;
use engine::{DEFAULT_DURATION_DAYS, Preferences, RecommendationEngine};
use tracing::debug;

use crate::render;

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User chose exit, or stdin closed
    Finished,
    /// Ctrl-C while waiting for input
    Interrupted,
}

type Step = ControlFlow<()>;

const MENU: &[&str] = &[
    "Get trip recommendations",
    "Browse festivals by month",
    "Browse festivals by country",
    "Seasonal highlights",
    "AI travel insights (coming soon)",
    "Booking (coming soon)",
    "Exit",
];

pub struct Session {
    engine: RecommendationEngine,
    interrupted: bool,
}

impl Session {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            engine,
            interrupted: false,
        }
    }

    pub async fn run(mut self) -> Result<SessionEnd> {
        println!("{}", "Welcome to the Trip Planner!".bold().blue());

        loop {
            println!();
            for (i, entry) in MENU.iter().enumerate() {
                println!("  {} {}", format!("{}.", i + 1).green(), entry);
            }

            let Some(choice) = self.ask("Choose an option [1-7]:").await? else {
                break;
            };

            let step = match choice.as_str() {
                "1" => self.get_recommendations().await?,
                "2" => self.browse_by_month().await?,
                "3" => self.browse_by_country().await?,
                "4" => self.seasonal_highlights().await?,
                "5" => {
                    println!("{}", "AI travel insights are coming soon.".yellow());
                    Step::Continue(())
                }
                "6" => {
                    println!("{}", "Booking integration is coming soon.".yellow());
                    Step::Continue(())
                }
                "7" => Step::Break(()),
                other => {
                    println!("{} '{}' is not an option.", "✗".red(), other);
                    Step::Continue(())
                }
            };

            if step.is_break() {
                break;
            }
        }

        println!("{}", "Goodbye, and happy travels!".bold().green());
        Ok(if self.interrupted {
            SessionEnd::Interrupted
        } else {
            SessionEnd::Finished
        })
    }

    async fn get_recommendations(&mut self) -> Result<Step> {
        let Some(month) = self.ask_month().await? else {
            return Ok(Step::Break(()));
        };
        let Some(budget) = self.ask_budget().await? else {
            return Ok(Step::Break(()));
        };
        let Some(days) = self.ask_days().await? else {
            return Ok(Step::Break(()));
        };
        let Some(country) = self
            .ask("Preferred city or country (blank for anywhere):")
            .await?
        else {
            return Ok(Step::Break(()));
        };

        let preferences = Preferences {
            travel_month: month.map(|m| m.as_str().to_string()),
            budget_category: Some(budget),
            duration_days: Some(days),
            preferred_country: Some(country),
        };
        debug!("Interactive preferences: {:?}", preferences);

        let recommendations = self.engine.recommend(&preferences)?;
        println!();
        render::print_recommendations(&recommendations, days);
        Ok(Step::Continue(()))
    }

    async fn browse_by_month(&mut self) -> Result<Step> {
        loop {
            let Some(answer) = self.ask("Month:").await? else {
                return Ok(Step::Break(()));
            };
            match Month::parse(&answer) {
                Some(month) => {
                    render::print_festivals(
                        &format!("Festivals in {}:", capitalize(month.as_str())),
                        self.engine.catalog().festivals_in_month(month),
                    );
                    return Ok(Step::Continue(()));
                }
                None => println!("{} Please enter a full month name, e.g. March.", "✗".red()),
            }
        }
    }

    async fn browse_by_country(&mut self) -> Result<Step> {
        loop {
            let Some(answer) = self.ask("City or country:").await? else {
                return Ok(Step::Break(()));
            };
            let Some(country) = normalize_country(&answer) else {
                println!("{} Please enter a city or country.", "✗".red());
                continue;
            };

            let catalog = self.engine.catalog();
            render::print_festivals(
                &format!("Festivals in {}:", country),
                catalog.festivals_by_country(&country),
            );
            if let Some(specialties) = catalog.country_specialties(&country) {
                render::print_specialties(&country, specialties);
            }
            return Ok(Step::Continue(()));
        }
    }

    async fn seasonal_highlights(&mut self) -> Result<Step> {
        let Some(answer) = self.ask("Month:").await? else {
            return Ok(Step::Break(()));
        };
        let highlights = self.engine.seasonal_highlights(answer.trim());
        render::print_highlights(answer.trim(), &highlights);
        Ok(Step::Continue(()))
    }

    /// `Some(None)` means any month
    async fn ask_month(&mut self) -> Result<Option<Option<Month>>> {
        loop {
            let Some(answer) = self.ask("Travel month (blank for any):").await? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(None));
            }
            match Month::parse(&answer) {
                Some(month) => return Ok(Some(Some(month))),
                None => println!("{} Unknown month '{}'.", "✗".red(), answer),
            }
        }
    }

    async fn ask_budget(&mut self) -> Result<Option<BudgetCategory>> {
        for (i, category) in BudgetCategory::ALL.iter().enumerate() {
            let band = category.spending_band();
            let range = match band.max {
                Some(max) => format!("${}-${}", band.min, max),
                None => format!("${}+", band.min),
            };
            println!("  {} {} ({})", format!("{}.", i + 1).green(), category, range);
        }

        loop {
            let Some(answer) = self.ask("Budget [1-3]:").await? else {
                return Ok(None);
            };
            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| BudgetCategory::ALL.get(i).copied())
                .or_else(|| answer.parse::<BudgetCategory>().ok());
            match picked {
                Some(category) => return Ok(Some(category)),
                None => println!("{} Please choose 1, 2 or 3.", "✗".red()),
            }
        }
    }

    async fn ask_days(&mut self) -> Result<Option<u32>> {
        loop {
            let Some(answer) = self.ask("Trip length in days [7]:").await? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(DEFAULT_DURATION_DAYS));
            }
            match answer.parse::<u32>() {
                Ok(days) if days > 0 => return Ok(Some(days)),
                _ => println!("{} Please enter a positive number of days.", "✗".red()),
            }
        }
    }

    /// Prompt and wait for one trimmed line; `None` on EOF or Ctrl-C.
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{} ", prompt.cyan());
        io::stdout().flush()?;

        tokio::select! {
            line = read_line() => line,
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                println!();
                self.interrupted = true;
                Ok(None)
            }
        }
    }
}

async fn read_line() -> Result<Option<String>> {
    let line = tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        Ok::<_, io::Error>((read > 0).then_some(buf))
    })
    .await
    .context("Stdin reader task failed")?
    .context("Failed to read from stdin")?;

    Ok(line.map(|l| l.trim().to_string()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
