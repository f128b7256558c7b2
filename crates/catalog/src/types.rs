//! Core domain types for the festival and destination catalog.
//!
//! Two budget vocabularies exist side by side:
//! - [`BudgetRange`] tags catalog items (`budget-friendly | moderate | expensive`)
//! - [`BudgetCategory`] is what a traveller asks for (`budget | moderate | luxury`)
//!
//! The mapping between them is the explicit table in
//! [`BudgetCategory::budget_range`].

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Budget vocabularies
// =============================================================================

/// Price tier a catalog item is tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetRange {
    BudgetFriendly,
    Moderate,
    Expensive,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 3] = [
        BudgetRange::BudgetFriendly,
        BudgetRange::Moderate,
        BudgetRange::Expensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::BudgetFriendly => "budget-friendly",
            BudgetRange::Moderate => "moderate",
            BudgetRange::Expensive => "expensive",
        }
    }

    /// Whether an item tagged `self` may be shown for a `requested` tier.
    ///
    /// An item is admissible when it sits exactly on the requested tier, or
    /// when it is budget-friendly and the request is moderate or expensive.
    /// Items are never shown above the requested tier. Moderate items are
    /// not admitted under an expensive request.
    pub fn is_admissible_under(&self, requested: BudgetRange) -> bool {
        *self == requested
            || (matches!(requested, BudgetRange::Moderate | BudgetRange::Expensive)
                && *self == BudgetRange::BudgetFriendly)
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget-friendly" => Ok(BudgetRange::BudgetFriendly),
            "moderate" => Ok(BudgetRange::Moderate),
            "expensive" => Ok(BudgetRange::Expensive),
            _ => Err(CatalogError::InvalidBudgetRange {
                value: s.to_string(),
            }),
        }
    }
}

/// Budget tier as chosen by the traveller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Budget,
    Moderate,
    Luxury,
}

/// Total trip spend associated with a [`BudgetCategory`], in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendingBand {
    pub min: u32,
    /// `None` means open-ended
    pub max: Option<u32>,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [
        BudgetCategory::Budget,
        BudgetCategory::Moderate,
        BudgetCategory::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Budget => "budget",
            BudgetCategory::Moderate => "moderate",
            BudgetCategory::Luxury => "luxury",
        }
    }

    /// Catalog tier this category searches for
    pub fn budget_range(&self) -> BudgetRange {
        match self {
            BudgetCategory::Budget => BudgetRange::BudgetFriendly,
            BudgetCategory::Moderate => BudgetRange::Moderate,
            BudgetCategory::Luxury => BudgetRange::Expensive,
        }
    }

    pub fn spending_band(&self) -> SpendingBand {
        match self {
            BudgetCategory::Budget => SpendingBand { min: 0, max: Some(1000) },
            BudgetCategory::Moderate => SpendingBand { min: 1000, max: Some(3000) },
            BudgetCategory::Luxury => SpendingBand { min: 3000, max: None },
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(BudgetCategory::Budget),
            "moderate" => Ok(BudgetCategory::Moderate),
            "luxury" => Ok(BudgetCategory::Luxury),
            _ => Err(CatalogError::InvalidBudgetCategory {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Calendar
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s.to_lowercase())
            .ok_or_else(|| CatalogError::UnknownSeason {
                value: s.to_string(),
            })
    }
}

/// Calendar month, keyed by its lowercase English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    pub fn season(&self) -> Season {
        match self {
            Month::March | Month::April | Month::May => Season::Spring,
            Month::June | Month::July | Month::August => Season::Summer,
            Month::September | Month::October | Month::November => Season::Autumn,
            Month::December | Month::January | Month::February => Season::Winter,
        }
    }

    /// Parse a month name case-insensitively, without trimming.
    ///
    /// Returns `None` for anything but the 12 full English names.
    pub fn parse(s: &str) -> Option<Month> {
        let lower = s.to_lowercase();
        Month::ALL.into_iter().find(|month| month.as_str() == lower)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s).ok_or_else(|| CatalogError::UnknownMonth {
            value: s.to_string(),
        })
    }
}

// =============================================================================
// Catalog records
// =============================================================================

/// A festival in the static catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Festival {
    pub name: &'static str,
    /// Canonical country name (e.g. "UK", "Japan")
    pub country: &'static str,
    pub description: &'static str,
    pub budget_range: BudgetRange,
}

/// Festivals of one month, in declaration order
#[derive(Debug, Clone, Copy)]
pub struct MonthFestivals {
    pub month: Month,
    pub festivals: &'static [Festival],
}

/// Months of one season, in declaration order
#[derive(Debug, Clone, Copy)]
pub struct SeasonFestivals {
    pub season: Season,
    pub months: &'static [MonthFestivals],
}

/// A pre-packaged destination trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationPackage {
    pub title: &'static str,
    pub description: &'static str,
    /// Every country the package visits
    pub countries: &'static [&'static str],
    /// Primary country, if the package is centred on one
    pub country_match: Option<&'static str>,
    pub budget_range: BudgetRange,
}

impl DestinationPackage {
    /// Whether this package covers `country` (case-insensitive).
    pub fn covers(&self, country: &str) -> bool {
        self.country_match
            .is_some_and(|primary| primary.eq_ignore_ascii_case(country))
            || self
                .countries
                .iter()
                .any(|c| c.eq_ignore_ascii_case(country))
    }
}

/// Specialty tags for one catalog country
#[derive(Debug, Clone, Copy)]
pub struct CountrySpecialties {
    pub country: &'static str,
    pub specialties: &'static [&'static str],
}
