//! End-to-end tests for the recommendation engine.

use catalog::{BudgetCategory, BudgetRange, Month};
use engine::{Preferences, RecommendationEngine, RecommendationKind};
use pipeline::cost_bounds;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

fn titles(engine: &RecommendationEngine, preferences: &Preferences) -> Vec<String> {
    engine
        .recommend(preferences)
        .unwrap()
        .into_iter()
        .map(|r| r.title)
        .collect()
}

#[test]
fn test_march_on_a_budget() {
    let engine = RecommendationEngine::new();
    let preferences = Preferences::new()
        .with_month("march")
        .with_budget(BudgetCategory::Budget);

    let recs = engine.recommend(&preferences).unwrap();
    let names: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();

    assert!(names.contains(&"Holi Festival"));
    assert!(!names.contains(&"Cherry Blossom Festival"));
    for rec in recs.iter().filter(|r| r.kind_label() == "festival") {
        assert_eq!(rec.budget_range, Some(BudgetRange::BudgetFriendly));
    }
}

#[test]
fn test_unknown_country_yields_notices() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .recommend(&Preferences::new().with_country("Mars"))
        .unwrap();

    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|r| r.is_notice()));
    assert!(recs[0].title.contains("Mars"));
    assert_eq!(recs[1].title, "Limited destinations");
}

#[test]
fn test_december_in_london() {
    let engine = RecommendationEngine::new();
    let preferences = Preferences::new()
        .with_month("December")
        .with_country("London")
        .with_budget(BudgetCategory::Moderate);

    assert_eq!(
        titles(&engine, &preferences),
        vec![
            "London Christmas Markets",
            "Winter Solstice",
            "London on a Shoestring"
        ]
    );
}

#[test]
fn test_luxury_request_admits_no_moderate_items() {
    let engine = RecommendationEngine::new();
    let preferences = Preferences::new()
        .with_country("england")
        .with_budget(BudgetCategory::Luxury);

    let recs = engine.recommend(&preferences).unwrap();
    assert!(!recs.is_empty());
    for rec in &recs {
        assert_ne!(rec.budget_range, Some(BudgetRange::Moderate));
    }
}

#[test]
fn test_never_more_than_three() {
    let engine = RecommendationEngine::new();
    let months = Month::ALL
        .iter()
        .map(|m| Some(m.as_str()))
        .chain([None, Some("xyz")]);

    for month in months {
        for budget in [
            None,
            Some(BudgetCategory::Budget),
            Some(BudgetCategory::Moderate),
            Some(BudgetCategory::Luxury),
        ] {
            for country in [None, Some("UK"), Some("Tokyo"), Some("Mars"), Some("")] {
                let preferences = Preferences {
                    travel_month: month.map(str::to_string),
                    budget_category: budget,
                    duration_days: Some(5),
                    preferred_country: country.map(str::to_string),
                };
                let recs = engine.recommend(&preferences).unwrap();
                assert!(recs.len() <= 3, "{:?} gave {} results", preferences, recs.len());
            }
        }
    }
}

#[test]
fn test_costs_within_bounds() {
    let engine = RecommendationEngine::new();
    let mut rng = StdRng::seed_from_u64(2024);

    for month in Month::ALL {
        let preferences = Preferences::new().with_month(month.as_str()).with_duration(9);
        for rec in engine.recommend_with_rng(&preferences, &mut rng).unwrap() {
            match rec.budget_range {
                Some(range) => {
                    let (min, max) = cost_bounds(range, 9);
                    assert!(rec.estimated_cost >= min && rec.estimated_cost <= max);
                }
                None => assert_eq!(rec.estimated_cost, 0),
            }
        }
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let engine = RecommendationEngine::new();
    let preferences = Preferences::new().with_month("august");

    let a = engine
        .recommend_with_rng(&preferences, &mut StdRng::seed_from_u64(5))
        .unwrap();
    let b = engine
        .recommend_with_rng(&preferences, &mut StdRng::seed_from_u64(5))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_declaration_order_without_preferences() {
    let engine = RecommendationEngine::new();
    let recs = engine.recommend(&Preferences::new()).unwrap();

    // First two budget-friendly festivals, spring first
    assert_eq!(recs[0].title, "Holi Festival");
    assert_eq!(recs[1].title, "Songkran");
    assert_eq!(recs[2].title, "Royal London Experience");
}

#[test]
fn test_default_duration_is_a_week() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .recommend(&Preferences::new().with_month("march"))
        .unwrap();

    let holi = &recs[0];
    let (min, max) = cost_bounds(BudgetRange::BudgetFriendly, 7);
    assert!((min..=max).contains(&holi.estimated_cost));
}

#[test]
fn test_zero_duration_costs_like_default_week() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .recommend(&Preferences::new().with_month("march").with_duration(0))
        .unwrap();

    assert!(!recs.is_empty());
    for rec in &recs {
        let (min, max) = cost_bounds(rec.budget_range.unwrap(), 7);
        assert!(rec.estimated_cost >= min && rec.estimated_cost <= max);
        assert!(rec.estimated_cost > 0);
    }
}

#[test]
fn test_destination_record_lists_countries() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .recommend(
            &Preferences::new()
                .with_country("bangkok")
                .with_budget(BudgetCategory::Budget),
        )
        .unwrap();

    let destination = recs
        .iter()
        .find(|r| r.kind_label() == "destination")
        .unwrap();
    match &destination.kind {
        RecommendationKind::Destination { countries } => {
            assert!(countries.iter().any(|c| c == "Thailand"))
        }
        other => panic!("unexpected kind {:?}", other),
    }
}

#[test]
fn test_concurrent_requests() {
    let engine = RecommendationEngine::new();

    let counts: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|i| {
            let month = Month::ALL[i % 12];
            let preferences = Preferences::new()
                .with_month(month.as_str())
                .with_budget(BudgetCategory::Moderate);
            engine.recommend(&preferences).unwrap().len()
        })
        .collect();

    assert_eq!(counts.len(), 64);
    assert!(counts.iter().all(|&n| (1..=3).contains(&n)));
}

#[test]
fn test_seasonal_highlights_via_engine() {
    let engine = RecommendationEngine::new();

    let july = engine.seasonal_highlights("july");
    assert!(july.weather_tips.contains("hot"));
    assert!(july.travel_tips.contains("advance"));

    let unknown = engine.seasonal_highlights("xyz");
    assert_eq!(unknown.weather_tips, "Check local weather conditions");
    assert_eq!(unknown.travel_tips, "Research local conditions before travel");
}

#[test]
fn test_invalid_budget_category_fails_fast() {
    let err = "premium".parse::<BudgetCategory>().unwrap_err();
    assert!(err.to_string().contains("premium"));
}

#[test]
fn test_json_output() {
    let engine = RecommendationEngine::new();
    let recs = engine
        .recommend(&Preferences::new().with_country("Mars"))
        .unwrap();

    let json = serde_json::to_value(&recs).unwrap();
    assert_eq!(json[0]["type"], "notice");
    assert!(json[0]["budget_range"].is_null());
}
