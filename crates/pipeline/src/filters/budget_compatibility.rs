//! Filter to keep only items the traveller's budget tier allows.
//!
//! An item is kept when its range equals the requested range, or when it is
//! budget-friendly and the request is moderate or expensive. See
//! [`catalog::BudgetRange::is_admissible_under`].

use crate::traits::Filter;
use anyhow::Result;
use sources::{Candidate, TripContext};

/// Removes candidates priced above (or beside) the requested tier.
///
/// Without a budget category every candidate is kept.
pub struct BudgetCompatibilityFilter;

impl Filter for BudgetCompatibilityFilter {
    fn name(&self) -> &str {
        "BudgetCompatibilityFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &TripContext,
    ) -> Result<Vec<Candidate>> {
        let Some(requested) = context.budget_range else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.budget_range().is_admissible_under(requested))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{BudgetRange, Catalog};

    fn all_festivals() -> Vec<Candidate> {
        Catalog::builtin().all_festivals().map(Candidate::Festival).collect()
    }

    fn context_for(range: BudgetRange) -> TripContext {
        TripContext {
            budget_range: Some(range),
            ..TripContext::unfiltered()
        }
    }

    #[test]
    fn test_budget_request_keeps_only_budget_friendly() {
        let filtered = BudgetCompatibilityFilter
            .apply(all_festivals(), &context_for(BudgetRange::BudgetFriendly))
            .unwrap();
        assert!(!filtered.is_empty());
        assert!(filtered
            .iter()
            .all(|c| c.budget_range() == BudgetRange::BudgetFriendly));
    }

    #[test]
    fn test_moderate_request() {
        let filtered = BudgetCompatibilityFilter
            .apply(all_festivals(), &context_for(BudgetRange::Moderate))
            .unwrap();
        assert!(filtered.iter().any(|c| c.budget_range() == BudgetRange::Moderate));
        assert!(filtered.iter().any(|c| c.budget_range() == BudgetRange::BudgetFriendly));
        assert!(filtered.iter().all(|c| c.budget_range() != BudgetRange::Expensive));
    }

    #[test]
    fn test_expensive_request_excludes_moderate() {
        let filtered = BudgetCompatibilityFilter
            .apply(all_festivals(), &context_for(BudgetRange::Expensive))
            .unwrap();
        assert!(filtered.iter().any(|c| c.budget_range() == BudgetRange::Expensive));
        assert!(filtered.iter().all(|c| c.budget_range() != BudgetRange::Moderate));
    }

    #[test]
    fn test_order_is_preserved() {
        let filtered = BudgetCompatibilityFilter
            .apply(all_festivals(), &context_for(BudgetRange::BudgetFriendly))
            .unwrap();
        let expected: Vec<Candidate> = Catalog::builtin()
            .budget_friendly_festivals()
            .into_iter()
            .map(Candidate::Festival)
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_no_budget_keeps_all() {
        let candidates = all_festivals();
        let count = candidates.len();
        let filtered = BudgetCompatibilityFilter
            .apply(candidates, &TripContext::unfiltered())
            .unwrap();
        assert_eq!(filtered.len(), count);
    }
}
