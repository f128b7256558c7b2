//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod budget_compatibility;
pub mod country_match;

// Re-export for convenience
pub use budget_compatibility::BudgetCompatibilityFilter;
pub use country_match::CountryMatchFilter;
