//! Filter to keep only items in the requested country.
//!
//! Festivals match on their country. Destination packages match on their
//! primary country or on any country they visit.

use crate::traits::Filter;
use anyhow::Result;
use sources::{Candidate, TripContext};

/// Keeps candidates located in `context.country`.
///
/// Without a requested country every candidate is kept.
pub struct CountryMatchFilter;

impl Filter for CountryMatchFilter {
    fn name(&self) -> &str {
        "CountryMatchFilter"
    }

    fn apply(
        &self,
        candidates: Vec<Candidate>,
        context: &TripContext,
    ) -> Result<Vec<Candidate>> {
        let Some(country) = context.country.as_deref() else {
            return Ok(candidates);
        };

        let filtered: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.matches_country(country))
            .collect();
        Ok(filtered)
    }
}
