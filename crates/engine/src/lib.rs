//! # Engine Crate
//!
//! Turns traveller preferences into at most three recommendations: up to two
//! festivals, then one destination package, with a notice standing in when a
//! requested country has nothing to offer.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::BudgetCategory;
//! use engine::{Preferences, RecommendationEngine};
//!
//! let engine = RecommendationEngine::new();
//! let preferences = Preferences::new()
//!     .with_month("March")
//!     .with_budget(BudgetCategory::Budget);
//!
//! let recommendations = engine.recommend(&preferences).unwrap();
//! assert_eq!(recommendations[0].title, "Holi Festival");
//! assert!(recommendations.len() <= 3);
//! ```

pub mod highlights;
pub mod orchestrator;
pub mod recommendation;

pub use catalog::normalize_country;
pub use highlights::SeasonalHighlights;
pub use orchestrator::RecommendationEngine;
pub use recommendation::{Recommendation, RecommendationKind};
pub use sources::{DEFAULT_DURATION_DAYS, Preferences};
