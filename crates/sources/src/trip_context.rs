//! Build a TripContext from raw Preferences
//!
//! Normalization happens once here so the sources and filters never see
//! free text country input.

use crate::types::{Preferences, TripContext};
use catalog::{Catalog, normalize_country_in};
use tracing::info;

/// Resolve preferences against `catalog`.
///
/// - blank month/country strings count as absent
/// - the country goes through the location normalizer
/// - the budget category is mapped to its catalog tier
/// - a missing or zero duration becomes `default_duration_days`
pub fn build_trip_context(
    catalog: &Catalog,
    preferences: &Preferences,
    default_duration_days: u32,
) -> TripContext {
    let travel_month = preferences
        .travel_month
        .as_deref()
        .map(str::trim)
        .filter(|month| !month.is_empty())
        .map(str::to_string);

    let country = preferences
        .preferred_country
        .as_deref()
        .and_then(|raw| normalize_country_in(catalog, raw));

    if let (Some(raw), Some(resolved)) = (preferences.preferred_country.as_deref(), &country) {
        info!("Resolved location '{}' to '{}'", raw.trim(), resolved);
    }

    TripContext {
        travel_month,
        country,
        budget_range: preferences.budget_category.map(|category| category.budget_range()),
        duration_days: preferences
            .duration_days
            .filter(|days| *days > 0)
            .unwrap_or(default_duration_days),
    }
}
