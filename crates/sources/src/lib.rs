//! # Sources Crate
//!
//! Candidate generation for trip recommendations.
//!
//! ## Components
//!
//! ### Trip Context
//! [`build_trip_context`] turns raw [`Preferences`] into a [`TripContext`]:
//! country input normalized, budget category mapped to a catalog tier, and
//! the default duration applied.
//!
//! ### Festival Source
//! Base festival set chosen by month and/or country, falling back to
//! budget-friendly festivals when neither is given.
//!
//! ### Destination Source
//! The destination package catalog, in declaration order.
//!
//! ## Example Usage
//!
//! ```
//! use catalog::Catalog;
//! use sources::{build_trip_context, FestivalSource, Preferences, DEFAULT_DURATION_DAYS};
//!
//! let catalog = Catalog::builtin();
//! let preferences = Preferences::new().with_month("march");
//! let context = build_trip_context(&catalog, &preferences, DEFAULT_DURATION_DAYS);
//!
//! let festivals = FestivalSource::new(catalog).get_candidates(&context);
//! assert_eq!(festivals[0].title(), "Holi Festival");
//! ```

// Public modules
pub mod destination;
pub mod festival;
pub mod trip_context;
pub mod types;

// Re-export commonly used types
pub use destination::DestinationSource;
pub use festival::FestivalSource;
pub use trip_context::build_trip_context;
pub use types::{Candidate, DEFAULT_DURATION_DAYS, Preferences, TripContext};
