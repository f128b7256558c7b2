//! Read-only queries over the festival and destination catalog.
//!
//! [`Catalog`] is a cheap `Copy` view over `'static` tables. Every query is
//! pure and deterministic, and returns items in declaration order (season,
//! then month, then position within the month).

use crate::data;
use crate::types::{
    BudgetRange, CountrySpecialties, DestinationPackage, Festival, Month, Season, SeasonFestivals,
};

/// Handle to a festival/destination dataset.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    festivals: &'static [SeasonFestivals],
    destinations: &'static [DestinationPackage],
    specialties: &'static [CountrySpecialties],
}

impl Catalog {
    /// The dataset shipped with the planner
    pub fn builtin() -> Self {
        Self {
            festivals: data::SEASONAL_FESTIVALS,
            destinations: data::DESTINATIONS,
            specialties: data::COUNTRY_SPECIALTIES,
        }
    }

    /// Build a catalog over custom tables (mostly for tests)
    pub fn from_tables(
        festivals: &'static [SeasonFestivals],
        destinations: &'static [DestinationPackage],
        specialties: &'static [CountrySpecialties],
    ) -> Self {
        Self {
            festivals,
            destinations,
            specialties,
        }
    }

    /// Festivals for a month name (case-insensitive).
    ///
    /// Anything other than one of the 12 month names yields an empty slice.
    pub fn festivals_by_month(&self, month: &str) -> &'static [Festival] {
        Month::parse(month)
            .map(|month| self.festivals_in_month(month))
            .unwrap_or(&[])
    }

    /// Festivals for an already-parsed month
    pub fn festivals_in_month(&self, month: Month) -> &'static [Festival] {
        self.festivals
            .iter()
            .flat_map(|season| season.months.iter())
            .find(|entry| entry.month == month)
            .map(|entry| entry.festivals)
            .unwrap_or(&[])
    }

    /// Every festival whose country equals `country` (case-insensitive).
    pub fn festivals_by_country(&self, country: &str) -> Vec<&'static Festival> {
        self.all_festivals()
            .filter(|festival| festival.country.eq_ignore_ascii_case(country))
            .collect()
    }

    /// Every festival tagged `budget-friendly`.
    pub fn budget_friendly_festivals(&self) -> Vec<&'static Festival> {
        self.all_festivals()
            .filter(|festival| festival.budget_range == BudgetRange::BudgetFriendly)
            .collect()
    }

    /// All festivals of a season name (case-insensitive); unknown → empty.
    pub fn festivals_by_season(&self, season: &str) -> Vec<&'static Festival> {
        let Ok(season) = season.parse::<Season>() else {
            return Vec::new();
        };
        self.festivals
            .iter()
            .filter(|entry| entry.season == season)
            .flat_map(|entry| entry.months.iter())
            .flat_map(|month| month.festivals.iter())
            .collect()
    }

    /// Iterate over the whole festival table in declaration order
    pub fn all_festivals(&self) -> impl Iterator<Item = &'static Festival> + 'static {
        let festivals = self.festivals;
        festivals
            .iter()
            .flat_map(|season| season.months.iter())
            .flat_map(|month| month.festivals.iter())
    }

    pub fn destinations(&self) -> &'static [DestinationPackage] {
        self.destinations
    }

    /// Canonical country names known to the catalog, in declaration order
    pub fn countries(&self) -> impl Iterator<Item = &'static str> + 'static {
        let specialties = self.specialties;
        specialties.iter().map(|entry| entry.country)
    }

    /// Specialty tags for a country (case-insensitive)
    pub fn country_specialties(&self, country: &str) -> Option<&'static [&'static str]> {
        self.specialties
            .iter()
            .find(|entry| entry.country.eq_ignore_ascii_case(country))
            .map(|entry| entry.specialties)
    }

    /// Total number of festivals, for diagnostics
    pub fn festival_count(&self) -> usize {
        self.all_festivals().count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
