//! Request-side types shared by the sources, the filter pipeline and the engine.

use catalog::{BudgetCategory, BudgetRange, DestinationPackage, Festival};
use serde::{Deserialize, Serialize};

/// Trip length used when the traveller does not give one
pub const DEFAULT_DURATION_DAYS: u32 = 7;

/// What the traveller asked for. Every field is optional and an absent field
/// applies no filter on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Free-text month name, e.g. "March"
    pub travel_month: Option<String>,
    pub budget_category: Option<BudgetCategory>,
    /// Trip length in days
    pub duration_days: Option<u32>,
    /// Free-text city or country, normalized before use
    pub preferred_country: Option<String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.travel_month = Some(month.into());
        self
    }

    pub fn with_budget(mut self, category: BudgetCategory) -> Self {
        self.budget_category = Some(category);
        self
    }

    pub fn with_duration(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.preferred_country = Some(country.into());
        self
    }
}

/// Preferences after normalization, ready for candidate generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripContext {
    /// Trimmed month text; `None` when absent or blank
    pub travel_month: Option<String>,
    /// Canonical country name
    pub country: Option<String>,
    /// Catalog tier for the requested budget category
    pub budget_range: Option<BudgetRange>,
    pub duration_days: u32,
}

impl TripContext {
    /// A context with no filters and the default duration
    pub fn unfiltered() -> Self {
        Self {
            travel_month: None,
            country: None,
            budget_range: None,
            duration_days: DEFAULT_DURATION_DAYS,
        }
    }
}

/// A catalog item that may become a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    Festival(&'static Festival),
    Destination(&'static DestinationPackage),
}

impl Candidate {
    pub fn budget_range(&self) -> BudgetRange {
        match self {
            Candidate::Festival(festival) => festival.budget_range,
            Candidate::Destination(package) => package.budget_range,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Candidate::Festival(festival) => festival.name,
            Candidate::Destination(package) => package.title,
        }
    }

    /// Whether the item is in (or covers) `country`, case-insensitively
    pub fn matches_country(&self, country: &str) -> bool {
        match self {
            Candidate::Festival(festival) => festival.country.eq_ignore_ascii_case(country),
            Candidate::Destination(package) => package.covers(country),
        }
    }
}
