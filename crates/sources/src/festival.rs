//! Festival Source
//!
//! Picks the base festival candidates for a trip:
//!
//! | month | country | base set                                    |
//! |-------|---------|---------------------------------------------|
//! | yes   | yes     | festivals of that month (narrowed by filter) |
//! | yes   | no      | festivals of that month                     |
//! | no    | yes     | festivals in that country                   |
//! | no    | no      | all budget-friendly festivals               |
//!
//! Country narrowing for the month+country case is left to the country
//! filter in the pipeline, so the source stays a plain catalog lookup.

use crate::types::{Candidate, TripContext};
use catalog::Catalog;
use tracing::{debug, instrument};

/// Generates festival candidates from the catalog
#[derive(Debug, Clone, Copy)]
pub struct FestivalSource {
    catalog: Catalog,
}

impl FestivalSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Base festival candidates in catalog declaration order
    #[instrument(skip(self, context), fields(month = ?context.travel_month, country = ?context.country))]
    pub fn get_candidates(&self, context: &TripContext) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = match (&context.travel_month, &context.country) {
            (Some(month), _) => self
                .catalog
                .festivals_by_month(month)
                .iter()
                .map(Candidate::Festival)
                .collect(),
            (None, Some(country)) => self
                .catalog
                .festivals_by_country(country)
                .into_iter()
                .map(Candidate::Festival)
                .collect(),
            (None, None) => self
                .catalog
                .budget_friendly_festivals()
                .into_iter()
                .map(Candidate::Festival)
                .collect(),
        };

        debug!("Generated {} festival candidates", candidates.len());
        candidates
    }
}
