//! Seasonal highlights: a month's festivals plus weather and travel tips.

use catalog::Catalog;
use catalog::Festival;
use catalog::data::{TRAVEL_TIPS, WEATHER_TIPS};
use serde::Serialize;

pub const DEFAULT_WEATHER_TIP: &str = "Check local weather conditions";
pub const DEFAULT_TRAVEL_TIP: &str = "Research local conditions before travel";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalHighlights {
    pub festivals: &'static [Festival],
    pub weather_tips: &'static str,
    pub travel_tips: &'static str,
}

/// Festivals and tips for a month name (case-insensitive).
///
/// Unknown months get no festivals and the generic fallback tips.
pub fn seasonal_highlights(catalog: &Catalog, month: &str) -> SeasonalHighlights {
    let key = month.to_lowercase();
    SeasonalHighlights {
        festivals: catalog.festivals_by_month(month),
        weather_tips: tip_for(WEATHER_TIPS, &key).unwrap_or(DEFAULT_WEATHER_TIP),
        travel_tips: tip_for(TRAVEL_TIPS, &key).unwrap_or(DEFAULT_TRAVEL_TIP),
    }
}

fn tip_for(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(month, _)| *month == key).map(|(_, tip)| *tip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Month;

    #[test]
    fn test_july() {
        let highlights = seasonal_highlights(&Catalog::builtin(), "July");
        assert_eq!(highlights.festivals.len(), 4);
        assert!(highlights.weather_tips.contains("hot"));
        assert!(highlights.travel_tips.contains("advance"));
    }

    #[test]
    fn test_unknown_month_falls_back() {
        let highlights = seasonal_highlights(&Catalog::builtin(), "xyz");
        assert!(highlights.festivals.is_empty());
        assert_eq!(highlights.weather_tips, DEFAULT_WEATHER_TIP);
        assert_eq!(highlights.travel_tips, DEFAULT_TRAVEL_TIP);
    }

    #[test]
    fn test_every_month_has_specific_tips() {
        for month in Month::ALL {
            let highlights = seasonal_highlights(&Catalog::builtin(), month.as_str());
            assert_ne!(highlights.weather_tips, DEFAULT_WEATHER_TIP, "{}", month);
            assert_ne!(highlights.travel_tips, DEFAULT_TRAVEL_TIP, "{}", month);
        }
    }
}
