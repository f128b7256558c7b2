//! Pipeline for filtering and costing trip candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - Cost estimation from a budget range and trip length
//!
//! ## Architecture
//! Candidates from the sources go through two stages:
//! 1. Filters remove items outside the requested country or budget tier
//! 2. Survivors are costed for the requested duration
//!
//! ## Example Usage
//! ```
//! use catalog::{BudgetCategory, Catalog};
//! use pipeline::filters::{BudgetCompatibilityFilter, CountryMatchFilter};
//! use pipeline::{estimate_cost, FilterPipeline};
//! use sources::{build_trip_context, FestivalSource, Preferences};
//!
//! let catalog = Catalog::builtin();
//! let preferences = Preferences::new()
//!     .with_month("march")
//!     .with_budget(BudgetCategory::Budget);
//! let context = build_trip_context(&catalog, &preferences, 7);
//! let candidates = FestivalSource::new(catalog).get_candidates(&context);
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(CountryMatchFilter)
//!     .add_filter(BudgetCompatibilityFilter);
//! let filtered = pipeline.apply(candidates, &context).unwrap();
//! assert_eq!(filtered[0].title(), "Holi Festival");
//!
//! let cost = estimate_cost(filtered[0].budget_range(), context.duration_days);
//! assert!((448..=672).contains(&cost));
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod pricing;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use pricing::{
    base_daily_cost, cost_bounds, estimate_cost, estimate_cost_for_label, estimate_cost_with,
};
pub use traits::Filter;
