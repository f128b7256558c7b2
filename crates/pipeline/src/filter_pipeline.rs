//! The FilterPipeline chains filters together.
//!
//! Filters are added with a builder and run in the order they were added.

use crate::traits::Filter;
use anyhow::{Context, Result};
use sources::{Candidate, TripContext};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CountryMatchFilter)
///     .add_filter(BudgetCompatibilityFilter);
///
/// let filtered = pipeline.apply(candidates, &context)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter sees the output of the previous one. Input and output
    /// counts are logged per filter at debug level.
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The filtered candidates after all filters
    /// * `Err` - If any filter fails, with the filter name as context
    pub fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &TripContext,
    ) -> Result<Vec<Candidate>> {
        let mut current = candidates;
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter
                .apply(current, context)
                .with_context(|| format!("Filter {} failed", filter.name()))?;
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{BudgetCompatibilityFilter, CountryMatchFilter};
    use anyhow::anyhow;
    use catalog::{BudgetRange, Catalog};

    struct FailingFilter;

    impl Filter for FailingFilter {
        fn name(&self) -> &str {
            "FailingFilter"
        }

        fn apply(&self, _: Vec<Candidate>, _: &TripContext) -> Result<Vec<Candidate>> {
            Err(anyhow!("boom"))
        }
    }

    fn march_candidates() -> Vec<Candidate> {
        Catalog::builtin()
            .festivals_by_month("march")
            .iter()
            .map(Candidate::Festival)
            .collect()
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filtered = pipeline
            .apply(march_candidates(), &TripContext::unfiltered())
            .unwrap();
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_filters_run_in_order() {
        let context = TripContext {
            country: Some("India".to_string()),
            budget_range: Some(BudgetRange::BudgetFriendly),
            ..TripContext::unfiltered()
        };

        let pipeline = FilterPipeline::new()
            .add_filter(CountryMatchFilter)
            .add_filter(BudgetCompatibilityFilter);
        assert_eq!(
            pipeline.filter_names(),
            vec!["CountryMatchFilter", "BudgetCompatibilityFilter"]
        );

        let filtered = pipeline.apply(march_candidates(), &context).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title(), "Holi Festival");
    }

    #[test]
    fn test_failing_filter_reports_name() {
        let pipeline = FilterPipeline::new()
            .add_filter(CountryMatchFilter)
            .add_filter(FailingFilter);

        let err = pipeline
            .apply(march_candidates(), &TripContext::unfiltered())
            .unwrap_err();
        assert!(err.to_string().contains("FailingFilter"));
    }
}
