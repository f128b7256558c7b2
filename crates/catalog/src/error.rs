//! Error types for the catalog crate.
//!
//! Catalog queries never fail on unknown input (they return empty results),
//! so these errors only come from parsing user-facing identifiers into the
//! closed enums in [`crate::types`].

use thiserror::Error;

/// Errors raised when a string does not name a known catalog value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Budget category outside `budget | moderate | luxury`.
    ///
    /// The CLI must only hand over one of the three recognized tiers, so this
    /// is a contract violation and is propagated rather than defaulted.
    #[error("Invalid budget category '{value}': expected one of budget, moderate, luxury")]
    InvalidBudgetCategory { value: String },

    /// Budget range outside `budget-friendly | moderate | expensive`
    #[error("Invalid budget range '{value}': expected one of budget-friendly, moderate, expensive")]
    InvalidBudgetRange { value: String },

    /// Not one of the 12 English month names
    #[error("Unknown month: {value}")]
    UnknownMonth { value: String },

    #[error("Unknown season: {value}")]
    UnknownSeason { value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
