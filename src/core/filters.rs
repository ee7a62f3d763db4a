use crate::models::{Candidate, FilterCriteria};

/// A maximum price at or above this value means "no upper bound".
///
/// Mirrors the price slider in the app, whose top stop reads "1000+".
pub const UNBOUNDED_PRICE_SENTINEL: f64 = 1000.0;

/// Check if any specialty contains any of the categories (case-insensitive)
///
/// An empty category list places no constraint.
#[inline]
pub fn matches_categories(candidate: &Candidate, categories: &[String]) -> bool {
    if categories.is_empty() {
        return true;
    }

    let wanted: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();

    candidate.specialties.iter().any(|specialty| {
        let text = specialty.display_text().to_lowercase();
        wanted.iter().any(|category| text.contains(category.as_str()))
    })
}

/// Check the rating floor
#[inline]
pub fn matches_rating(candidate: &Candidate, min_rating: Option<f64>) -> bool {
    match min_rating {
        Some(min) => candidate.rating >= min,
        None => true,
    }
}

/// Check the price range. A maximum at or above `UNBOUNDED_PRICE_SENTINEL`
/// is ignored; a minimum is always honored.
#[inline]
pub fn matches_price(candidate: &Candidate, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if let Some(min) = min_price {
        if candidate.starting_price < min {
            return false;
        }
    }

    if let Some(max) = max_price {
        if max < UNBOUNDED_PRICE_SENTINEL && candidate.starting_price > max {
            return false;
        }
    }

    true
}

/// Check a candidate against every criterion (all must hold)
#[inline]
pub fn matches_criteria(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    matches_categories(candidate, &criteria.categories)
        && matches_rating(candidate, criteria.min_rating)
        && matches_price(candidate, criteria.min_price, criteria.max_price)
}

/// Keep the candidates that satisfy `criteria`, preserving order
pub fn apply_filters<'a, I>(candidates: I, criteria: &FilterCriteria) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .filter(|candidate| matches_criteria(candidate, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Specialty;

    fn create_test_candidate(id: &str, tags: &[&str], rating: f64, price: f64) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Workshop {}", id),
            specialties: tags.iter().map(|t| Specialty::from(*t)).collect(),
            location: "PJ".to_string(),
            rating,
            starting_price: price,
            coordinates: None,
        }
    }

    fn ids<'a>(candidates: &[&'a Candidate]) -> Vec<&'a str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let candidates = vec![
            create_test_candidate("1", &["Tires"], 4.5, 80.0),
            create_test_candidate("2", &[], 0.0, 5000.0),
        ];

        let filtered = apply_filters(&candidates, &FilterCriteria::default());
        assert_eq!(ids(&filtered), vec!["1", "2"]);
    }

    #[test]
    fn test_categories_are_or_and_case_insensitive() {
        let candidates = vec![
            create_test_candidate("1", &["Tyre Replacement"], 4.0, 100.0),
            create_test_candidate("2", &[r#"{"name":"Aircon Service"}"#], 4.0, 100.0),
            create_test_candidate("3", &["Engine"], 4.0, 100.0),
        ];
        let criteria = FilterCriteria {
            categories: vec!["tyre".to_string(), "AIRCON".to_string()],
            ..Default::default()
        };

        let filtered = apply_filters(&candidates, &criteria);
        assert_eq!(ids(&filtered), vec!["1", "2"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let candidates = vec![
            create_test_candidate("1", &[], 4.5, 100.0),
            create_test_candidate("2", &[], 4.0, 100.0),
            create_test_candidate("3", &[], 3.9, 100.0),
        ];
        let criteria = FilterCriteria {
            min_rating: Some(4.0),
            ..Default::default()
        };

        let filtered = apply_filters(&candidates, &criteria);
        assert_eq!(ids(&filtered), vec!["1", "2"]);
    }

    #[test]
    fn test_max_price_sentinel() {
        let candidates = vec![
            create_test_candidate("1", &["Tires"], 4.5, 80.0),
            create_test_candidate("2", &["Engine"], 4.0, 150.0),
            create_test_candidate("3", &["Engine"], 4.0, 2500.0),
        ];

        let unbounded = FilterCriteria {
            max_price: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(apply_filters(&candidates, &unbounded).len(), 3);

        let bounded = FilterCriteria {
            max_price: Some(100.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&candidates, &bounded)), vec!["1"]);

        let just_below = FilterCriteria {
            max_price: Some(999.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&candidates, &just_below)), vec!["1", "2"]);
    }

    #[test]
    fn test_min_price_has_no_sentinel() {
        let candidates = vec![
            create_test_candidate("1", &[], 4.0, 999.0),
            create_test_candidate("2", &[], 4.0, 1500.0),
        ];
        let criteria = FilterCriteria {
            min_price: Some(1000.0),
            ..Default::default()
        };

        assert_eq!(ids(&apply_filters(&candidates, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_all_constraints_are_anded() {
        let candidate = create_test_candidate("1", &["Brakes"], 4.8, 120.0);

        let passing = FilterCriteria {
            categories: vec!["brake".to_string()],
            min_rating: Some(4.5),
            min_price: Some(100.0),
            max_price: Some(200.0),
        };
        assert!(matches_criteria(&candidate, &passing));

        let failing_price = FilterCriteria {
            max_price: Some(110.0),
            ..passing.clone()
        };
        assert!(!matches_criteria(&candidate, &failing_price));

        let failing_category = FilterCriteria {
            categories: vec!["paint".to_string()],
            ..passing
        };
        assert!(!matches_criteria(&candidate, &failing_category));
    }
}
