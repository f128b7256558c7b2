//! # Recommendation Engine
//!
//! This module coordinates the recommendation flow:
//! 1. Build the trip context (normalize country, map budget tier)
//! 2. Festival sub-flow: base candidates → country/budget filters →
//!    up to 2 festivals, or a notice when a requested country has none
//! 3. Destination sub-flow: country filter (notice and stop when empty) →
//!    budget filter → first surviving package
//! 4. Concatenate festivals then destinations and cap at 3
//!
//! Ordering is always catalog declaration order; nothing is re-ranked.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};

use catalog::Catalog;
use pipeline::filters::{BudgetCompatibilityFilter, CountryMatchFilter};
use pipeline::{FilterPipeline, estimate_cost_with};
use sources::{
    Candidate, DEFAULT_DURATION_DAYS, DestinationSource, FestivalSource, Preferences, TripContext,
    build_trip_context,
};

use crate::highlights::{SeasonalHighlights, seasonal_highlights};
use crate::recommendation::Recommendation;

/// Main engine that turns preferences into a short recommendation list
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    festival_source: FestivalSource,
    destination_source: DestinationSource,
    festival_filters: Arc<FilterPipeline>,
    country_filter: Arc<FilterPipeline>,
    budget_filter: Arc<FilterPipeline>,
    festival_limit: usize,
    destination_limit: usize,
    total_limit: usize,
    default_duration_days: u32,
}

impl RecommendationEngine {
    /// Engine over the built-in catalog with the default caps
    /// (2 festivals, 1 destination, 3 total) and a 7-day default trip.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            festival_source: FestivalSource::new(catalog),
            destination_source: DestinationSource::new(catalog),
            festival_filters: Arc::new(
                FilterPipeline::new()
                    .add_filter(CountryMatchFilter)
                    .add_filter(BudgetCompatibilityFilter),
            ),
            country_filter: Arc::new(FilterPipeline::new().add_filter(CountryMatchFilter)),
            budget_filter: Arc::new(FilterPipeline::new().add_filter(BudgetCompatibilityFilter)),
            festival_limit: 2,
            destination_limit: 1,
            total_limit: 3,
            default_duration_days: DEFAULT_DURATION_DAYS,
        }
    }

    /// Configure how many festivals may be recommended (default: 2)
    pub fn with_festival_limit(mut self, limit: usize) -> Self {
        self.festival_limit = limit;
        self
    }

    /// Configure how many destination packages may be recommended (default: 1)
    pub fn with_destination_limit(mut self, limit: usize) -> Self {
        self.destination_limit = limit;
        self
    }

    /// Configure the cap on the combined list (default: 3)
    pub fn with_total_limit(mut self, limit: usize) -> Self {
        self.total_limit = limit;
        self
    }

    /// Configure the trip length used when none is given (default: 7)
    pub fn with_default_duration(mut self, days: u32) -> Self {
        self.default_duration_days = days;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Main entry point: recommendations for a set of preferences.
    ///
    /// Cost jitter is drawn from the calling thread's RNG.
    pub fn recommend(&self, preferences: &Preferences) -> Result<Vec<Recommendation>> {
        self.recommend_with_rng(preferences, &mut rand::rng())
    }

    /// Same as [`recommend`](Self::recommend) with a caller-supplied RNG.
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        preferences: &Preferences,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>> {
        let start_time = Instant::now();

        let context = self.build_trip_context(preferences);
        debug!("Built trip context: {:?}", context);

        let festivals = self
            .recommend_festivals(&context, rng)
            .context("Failed to build festival recommendations")?;
        let destinations = self
            .recommend_destinations(&context, rng)
            .context("Failed to build destination recommendations")?;
        info!(
            "Festival recommendations: {}, destination recommendations: {}",
            festivals.len(),
            destinations.len()
        );

        let mut recommendations = festivals;
        recommendations.extend(destinations);
        recommendations.truncate(self.total_limit);

        info!(
            "Returning {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Festivals and tips for a month
    pub fn seasonal_highlights(&self, month: &str) -> SeasonalHighlights {
        seasonal_highlights(&self.catalog, month)
    }

    fn build_trip_context(&self, preferences: &Preferences) -> TripContext {
        build_trip_context(&self.catalog, preferences, self.default_duration_days)
    }

    /// Festival sub-flow
    fn recommend_festivals<R: Rng + ?Sized>(
        &self,
        context: &TripContext,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>> {
        let candidates = self.festival_source.get_candidates(context);
        let filtered = self.festival_filters.apply(candidates, context)?;

        if filtered.is_empty() {
            if let Some(country) = context.country.as_deref() {
                info!("No festivals found for {}", country);
                return Ok(vec![Recommendation::no_festival_data(country)]);
            }
        }

        Ok(filtered
            .into_iter()
            .take(self.festival_limit)
            .filter_map(|candidate| match candidate {
                Candidate::Festival(festival) => Some(Recommendation::festival(
                    festival,
                    estimate_cost_with(rng, festival.budget_range, context.duration_days),
                )),
                Candidate::Destination(_) => None,
            })
            .collect())
    }

    /// Destination sub-flow
    fn recommend_destinations<R: Rng + ?Sized>(
        &self,
        context: &TripContext,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>> {
        let mut candidates = self.destination_source.get_candidates(context);

        if let Some(country) = context.country.as_deref() {
            candidates = self.country_filter.apply(candidates, context)?;
            if candidates.is_empty() {
                info!("No destination packages cover {}", country);
                return Ok(vec![Recommendation::limited_destinations(country)]);
            }
        }

        let filtered = self.budget_filter.apply(candidates, context)?;

        Ok(filtered
            .into_iter()
            .take(self.destination_limit)
            .filter_map(|candidate| match candidate {
                Candidate::Destination(package) => Some(Recommendation::destination(
                    package,
                    estimate_cost_with(rng, package.budget_range, context.duration_days),
                )),
                Candidate::Festival(_) => None,
            })
            .collect())
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationKind;
    use catalog::{BudgetCategory, BudgetRange};
    use pipeline::cost_bounds;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn titles(recommendations: &[Recommendation]) -> Vec<&str> {
        recommendations.iter().map(|r| r.title.as_str()).collect()
    }

    fn context(country: Option<&str>, budget: Option<BudgetCategory>) -> TripContext {
        TripContext {
            country: country.map(str::to_string),
            budget_range: budget.map(|b| b.budget_range()),
            ..TripContext::unfiltered()
        }
    }

    // ============================================================================
    // Unit Tests: recommend_festivals
    // ============================================================================

    #[test]
    fn test_festivals_capped_at_two_in_catalog_order() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        let context = TripContext {
            travel_month: Some("october".to_string()),
            ..TripContext::unfiltered()
        };

        let recs = engine.recommend_festivals(&context, &mut rng).unwrap();
        assert_eq!(titles(&recs), vec!["Diwali", "Day of the Dead"]);
    }

    #[test]
    fn test_festival_notice_for_unknown_country() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        let recs = engine
            .recommend_festivals(&context(Some("Mars"), None), &mut rng)
            .unwrap();
        assert_eq!(recs.len(), 1);
        assert!(recs[0].is_notice());
        assert!(recs[0].title.contains("Mars"));
    }

    #[test]
    fn test_festival_notice_when_budget_removes_everything() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        // Every Australian festival is expensive
        let recs = engine
            .recommend_festivals(&context(Some("Australia"), Some(BudgetCategory::Budget)), &mut rng)
            .unwrap();
        assert_eq!(recs.len(), 1);
        assert!(recs[0].is_notice());
    }

    #[test]
    fn test_no_notice_without_country() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);
        let context = TripContext {
            travel_month: Some("xyz".to_string()),
            ..TripContext::unfiltered()
        };

        let recs = engine.recommend_festivals(&context, &mut rng).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_festival_costs_use_duration() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(9);
        let context = TripContext {
            travel_month: Some("march".to_string()),
            duration_days: 3,
            ..TripContext::unfiltered()
        };

        let recs = engine.recommend_festivals(&context, &mut rng).unwrap();
        for rec in &recs {
            let range = rec.budget_range.unwrap();
            let (min, max) = cost_bounds(range, 3);
            assert!(rec.estimated_cost >= min && rec.estimated_cost <= max);
        }
    }

    // ============================================================================
    // Unit Tests: recommend_destinations
    // ============================================================================

    #[test]
    fn test_destination_first_in_catalog_order() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        let recs = engine
            .recommend_destinations(&context(Some("UK"), None), &mut rng)
            .unwrap();
        assert_eq!(titles(&recs), vec!["Royal London Experience"]);
    }

    #[test]
    fn test_destination_budget_skips_expensive() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        let recs = engine
            .recommend_destinations(&context(Some("UK"), Some(BudgetCategory::Budget)), &mut rng)
            .unwrap();
        assert_eq!(titles(&recs), vec!["London on a Shoestring"]);
        assert_eq!(recs[0].budget_range, Some(BudgetRange::BudgetFriendly));
    }

    #[test]
    fn test_limited_destinations_notice_stops_flow() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        let recs = engine
            .recommend_destinations(&context(Some("India"), None), &mut rng)
            .unwrap();
        assert_eq!(recs.len(), 1);
        assert!(matches!(recs[0].kind, RecommendationKind::Notice { .. }));
        assert_eq!(recs[0].title, "Limited destinations");
    }

    #[test]
    fn test_country_match_but_budget_mismatch_yields_nothing() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        // Japan's only package is moderate
        let recs = engine
            .recommend_destinations(&context(Some("Japan"), Some(BudgetCategory::Budget)), &mut rng)
            .unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_destination_without_country_uses_whole_catalog() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(1);

        let recs = engine
            .recommend_destinations(&context(None, Some(BudgetCategory::Moderate)), &mut rng)
            .unwrap();
        assert_eq!(titles(&recs), vec!["London on a Shoestring"]);
    }

    // ============================================================================
    // Configuration
    // ============================================================================

    #[test]
    fn test_custom_limits() {
        let engine = RecommendationEngine::new()
            .with_festival_limit(4)
            .with_total_limit(10);
        let preferences = Preferences::new().with_month("march");

        let recs = engine.recommend(&preferences).unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[4].kind_label(), "destination");
    }

    #[test]
    fn test_custom_default_duration() {
        let engine = RecommendationEngine::new().with_default_duration(1);
        let preferences = Preferences::new().with_month("march");

        let recs = engine.recommend(&preferences).unwrap();
        let (_, max) = cost_bounds(BudgetRange::Expensive, 1);
        assert!(recs.iter().all(|r| r.estimated_cost <= max));
    }
}
