// Unit tests for Workshop Discovery

use proptest::prelude::*;
use workshop_discovery::core::{
    filters::{apply_filters, UNBOUNDED_PRICE_SENTINEL},
    fuzzy::{levenshtein_distance, match_strength, MatchStrength},
    geo::{distance_km, radius_from_zoom, within_bounds, MAX_RADIUS_METERS, MIN_RADIUS_METERS},
    Discovery,
};
use workshop_discovery::models::{Candidate, Coordinates, FilterCriteria, MapBounds, MatchedField, Specialty};

fn create_candidate(id: &str, name: &str, tags: &[&str], location: &str, rating: f64, price: f64) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        specialties: tags.iter().map(|t| Specialty::from(*t)).collect(),
        location: location.to_string(),
        rating,
        starting_price: price,
        coordinates: None,
    }
}

fn example_candidates() -> Vec<Candidate> {
    vec![
        create_candidate("1", "Ali's Tyre Shop", &["Tires"], "PJ", 4.5, 80.0),
        create_candidate("2", "Best Garage", &["Engine"], "KL", 4.0, 150.0),
    ]
}

#[test]
fn test_tyre_query_example() {
    let discovery = Discovery::with_defaults();
    let candidates = example_candidates();

    let results = discovery.search("tyre", &candidates);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate.id, "1");
    assert!(results[0].score > 0.0);
    assert!(results[0].matched_fields.contains(&MatchedField::Name));
    assert!(results[0].matched_fields.contains(&MatchedField::Tag));
}

#[test]
fn test_empty_query_returns_every_candidate() {
    let discovery = Discovery::with_defaults();
    let candidates = example_candidates();

    for query in ["", "   ", "\t\n"] {
        let results = discovery.search(query, &candidates);
        assert_eq!(results.len(), candidates.len());
        assert!(results.iter().all(|r| r.matched_fields.is_empty()));
    }
}

#[test]
fn test_typo_still_matches() {
    let discovery = Discovery::with_defaults();
    let candidates = vec![create_candidate("1", "Speedy Alignment", &[], "Subang", 4.1, 90.0)];

    let results = discovery.search("alignmnet", &candidates);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].matched_fields.iter().copied().collect::<Vec<_>>(), vec![MatchedField::Name]);
}

#[test]
fn test_structured_tags_are_searchable() {
    let discovery = Discovery::with_defaults();
    let candidates = vec![create_candidate(
        "1",
        "Cool Car Care",
        &[r#"{"id":"svc-9","name":"Aircon Regas"}"#],
        "Cheras",
        4.3,
        70.0,
    )];

    let results = discovery.search("aircon", &candidates);

    assert_eq!(results.len(), 1);
    assert!(results[0].matched_fields.contains(&MatchedField::Tag));
}

#[test]
fn test_max_price_sentinel_examples() {
    let candidates = example_candidates();

    let sentinel = FilterCriteria {
        max_price: Some(UNBOUNDED_PRICE_SENTINEL),
        ..Default::default()
    };
    assert_eq!(apply_filters(&candidates, &sentinel).len(), 2);

    let bounded = FilterCriteria {
        max_price: Some(100.0),
        ..Default::default()
    };
    let filtered = apply_filters(&candidates, &bounded);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "1");
}

#[test]
fn test_radius_from_zoom_examples() {
    assert_eq!(radius_from_zoom(8.0), 40_000.0);
    assert!((radius_from_zoom(13.0) - 40_000.0 / 32.0).abs() < 1e-9);
}

#[test]
fn test_one_degree_latitude_is_about_111km() {
    let a = Coordinates::new(10.0, 20.0);
    let b = Coordinates::new(11.0, 20.0);
    assert!((distance_km(&a, &b) - 111.0).abs() < 1.0);
}

#[test]
fn test_match_strength_order_of_checks() {
    // Substring wins even when the edit distance would also qualify
    assert_eq!(match_strength("tyre", "tyres"), MatchStrength::Substring);
    assert_eq!(levenshtein_distance("tyre", "tyres"), 1);
}

#[test]
fn test_within_bounds_wraparound() {
    let pacific = MapBounds { north: 10.0, south: -10.0, east: -170.0, west: 170.0 };
    assert!(within_bounds(&Coordinates::new(0.0, 175.0), &pacific));
    assert!(within_bounds(&Coordinates::new(0.0, -175.0), &pacific));
    assert!(!within_bounds(&Coordinates::new(0.0, 100.0), &pacific));
}

fn token() -> impl Strategy<Value = String> {
    "[a-z]{0,10}"
}

fn coordinate() -> impl Strategy<Value = Coordinates> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        "[a-z]{1,8}( [a-z]{1,8}){0,2}",
        prop::collection::vec("[a-z]{1,8}", 0..3),
        "[a-z]{1,6}",
        0.0f64..=5.0,
        0.0f64..=2000.0,
    )
        .prop_map(|(name, tags, location, rating, price)| Candidate {
            id: name.clone(),
            name,
            specialties: tags.iter().map(|t| Specialty::from(t.as_str())).collect(),
            location,
            rating,
            starting_price: price,
            coordinates: None,
        })
}

proptest! {
    #[test]
    fn prop_edit_distance_symmetric(a in token(), b in token()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
    }

    #[test]
    fn prop_distance_symmetric(a in coordinate(), b in coordinate()) {
        let ab = distance_km(&a, &b);
        let ba = distance_km(&b, &a);
        prop_assert!((ab - ba).abs() < 1e-9);
        prop_assert!(ab >= 0.0 && !ab.is_nan());
        prop_assert!(distance_km(&a, &a).abs() < 1e-9);
    }

    #[test]
    fn prop_radius_always_clamped(zoom in -1000.0f64..1000.0) {
        let radius = radius_from_zoom(zoom);
        prop_assert!((MIN_RADIUS_METERS..=MAX_RADIUS_METERS).contains(&radius));
    }

    #[test]
    fn prop_stricter_rating_never_grows_result(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
        min_rating in 0.0f64..=5.0,
    ) {
        let unconstrained = apply_filters(&candidates, &FilterCriteria::default());
        let constrained = apply_filters(&candidates, &FilterCriteria {
            min_rating: Some(min_rating),
            ..Default::default()
        });
        prop_assert!(constrained.len() <= unconstrained.len());
    }

    #[test]
    fn prop_search_then_filter_is_deterministic(
        candidates in prop::collection::vec(candidate_strategy(), 0..20),
        query in "[a-z]{0,6}( [a-z]{1,6})?",
    ) {
        let discovery = Discovery::with_defaults();
        let criteria = FilterCriteria { max_price: Some(500.0), ..Default::default() };

        let run = || {
            let hits = discovery.search(&query, &candidates);
            hits.into_iter()
                .filter(|hit| apply_filters([hit.candidate], &criteria).len() == 1)
                .map(|hit| (hit.candidate.id.clone(), hit.score, hit.matched_fields))
                .collect::<Vec<_>>()
        };

        prop_assert_eq!(run(), run());
    }

    #[test]
    fn prop_search_results_bounded_and_sorted(
        candidates in prop::collection::vec(candidate_strategy(), 0..30),
        query in "[a-z]{1,6}",
    ) {
        let results = Discovery::with_defaults().search(&query, &candidates);
        prop_assert!(results.len() <= 10);
        prop_assert!(results.iter().all(|r| r.score > 0.0));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
