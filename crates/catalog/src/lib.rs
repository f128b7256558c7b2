//! # Catalog Crate
//!
//! The static festival and destination dataset behind the trip planner,
//! plus the pure lookups that everything else is built on.
//!
//! ## Main Components
//!
//! - **types**: Domain types (Festival, DestinationPackage, budget tiers, Month)
//! - **data**: The built-in `'static` tables
//! - **index**: [`Catalog`] queries by month, country, season and budget
//! - **normalizer**: Free-text city/country → canonical country name
//! - **error**: Error types for parsing catalog identifiers
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Catalog, normalize_country};
//!
//! let catalog = Catalog::builtin();
//! let march = catalog.festivals_by_month("March");
//! assert_eq!(march[0].name, "Holi Festival");
//!
//! assert_eq!(normalize_country("london").as_deref(), Some("UK"));
//! ```

pub mod data;
pub mod error;
pub mod index;
pub mod normalizer;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::Catalog;
pub use normalizer::{normalize_country, normalize_country_in};
pub use types::{
    BudgetCategory, BudgetRange, CountrySpecialties, DestinationPackage, Festival, Month,
    MonthFestivals, Season, SeasonFestivals, SpendingBand,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.festival_count(), 46);
        assert_eq!(catalog.destinations().len(), 8);
    }

    #[test]
    fn test_every_festival_country_is_canonical() {
        // Festival countries must normalize to themselves, otherwise a
        // country query built from user input could never reach them.
        let catalog = Catalog::builtin();
        for festival in catalog.all_festivals() {
            assert_eq!(
                normalize_country(festival.country).as_deref(),
                Some(festival.country),
                "{} has a non-canonical country",
                festival.name
            );
        }
    }

    #[test]
    fn test_every_month_declared_once() {
        let mut months: Vec<Month> = data::SEASONAL_FESTIVALS
            .iter()
            .flat_map(|season| season.months.iter().map(|m| m.month))
            .collect();
        months.sort();
        assert_eq!(months, Month::ALL.to_vec());

        for season in data::SEASONAL_FESTIVALS {
            for entry in season.months {
                assert_eq!(entry.month.season(), season.season);
            }
        }
    }
}
