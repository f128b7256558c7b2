//! Destination Source
//!
//! Destination packages are few and fixed, so the source hands over the
//! whole catalog in declaration order and lets the filters do the work.

use crate::types::{Candidate, TripContext};
use catalog::Catalog;
use tracing::{debug, instrument};

/// Generates destination package candidates from the catalog
#[derive(Debug, Clone, Copy)]
pub struct DestinationSource {
    catalog: Catalog,
}

impl DestinationSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self, _context))]
    pub fn get_candidates(&self, _context: &TripContext) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = self
            .catalog
            .destinations()
            .iter()
            .map(Candidate::Destination)
            .collect();
        debug!("Generated {} destination candidates", candidates.len());
        candidates
    }
}
