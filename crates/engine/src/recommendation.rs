//! Recommendation records returned to the presentation layer.

use catalog::{BudgetRange, DestinationPackage, Festival};
use serde::Serialize;

/// One entry of a recommendation list.
///
/// Serializes flat, with the variant in a `type` field:
/// `{"title": .., "description": .., "budget_range": .., "estimated_cost": .., "type": "festival", "country": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    /// `None` for notices
    pub budget_range: Option<BudgetRange>,
    /// Estimated total trip cost in USD; 0 for notices
    pub estimated_cost: u64,
    #[serde(flatten)]
    pub kind: RecommendationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecommendationKind {
    Festival { country: String },
    Destination { countries: Vec<String> },
    /// Nothing matched; `suggestion` says what to try instead
    Notice { suggestion: String },
}

impl Recommendation {
    pub fn festival(festival: &Festival, estimated_cost: u64) -> Self {
        Self {
            title: festival.name.to_string(),
            description: festival.description.to_string(),
            budget_range: Some(festival.budget_range),
            estimated_cost,
            kind: RecommendationKind::Festival {
                country: festival.country.to_string(),
            },
        }
    }

    pub fn destination(package: &DestinationPackage, estimated_cost: u64) -> Self {
        Self {
            title: package.title.to_string(),
            description: package.description.to_string(),
            budget_range: Some(package.budget_range),
            estimated_cost,
            kind: RecommendationKind::Destination {
                countries: package.countries.iter().map(|c| c.to_string()).collect(),
            },
        }
    }

    pub fn notice(
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            budget_range: None,
            estimated_cost: 0,
            kind: RecommendationKind::Notice {
                suggestion: suggestion.into(),
            },
        }
    }

    /// Notice emitted when a requested country has no matching festivals
    pub fn no_festival_data(country: &str) -> Self {
        Self::notice(
            format!("No festival data for {}", country),
            format!("We don't have festival information for {} yet", country),
            format!(
                "Explore general sightseeing, local food and cultural landmarks in {}",
                country
            ),
        )
    }

    /// Notice emitted when no destination package covers a requested country
    pub fn limited_destinations(country: &str) -> Self {
        Self::notice(
            "Limited destinations",
            format!("No curated destination packages cover {} yet", country),
            "Try a neighbouring country, or search without a country to see every package",
        )
    }

    pub fn is_notice(&self) -> bool {
        matches!(self.kind, RecommendationKind::Notice { .. })
    }

    /// `"festival"`, `"destination"` or `"notice"`
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            RecommendationKind::Festival { .. } => "festival",
            RecommendationKind::Destination { .. } => "destination",
            RecommendationKind::Notice { .. } => "notice",
        }
    }
}
