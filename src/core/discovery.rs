use serde::Serialize;
use std::cmp::Ordering;

use crate::core::{
    filters::{apply_filters, matches_criteria},
    geo::{distance_km, within_bounds},
    scoring::rank_by_relevance,
    synonyms::SynonymTable,
};
use crate::models::{Candidate, Coordinates, FieldWeights, FilterCriteria, GeoConstraint, ScoredCandidate};

/// Inputs for one discovery run
#[derive(Debug, Clone, Default)]
pub struct DiscoveryQuery {
    /// Raw search text; blank means no text search
    pub text: String,
    pub criteria: FilterCriteria,
    /// Where the user is, when the location provider knows it
    pub user_location: Option<Coordinates>,
    /// Map-mode restriction, when the consumer is browsing the map
    pub constraint: Option<GeoConstraint>,
}

/// Candidate in the final discovery result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate<'a> {
    #[serde(flatten)]
    pub scored: ScoredCandidate<'a>,
    /// Distance to the user, when both locations are known
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl<'a> RankedCandidate<'a> {
    pub fn candidate(&self) -> &'a Candidate {
        self.scored.candidate
    }
}

/// Number of candidates left after each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub searched: usize,
    pub filtered: usize,
    pub constrained: usize,
}

/// Result of the discovery pipeline
#[derive(Debug)]
pub struct DiscoveryResult<'a> {
    pub results: Vec<RankedCandidate<'a>>,
    pub total_candidates: usize,
    pub stages: StageCounts,
}

/// Main discovery orchestrator - search, filter, proximity sort, map constraint
///
/// # Pipeline Stages
/// 1. Text search (skipped for a blank query)
/// 2. Filter criteria
/// 3. Stable sort by distance to the user, when their location is known
/// 4. Radius or bounds constraint, when in map mode
///
/// Every stage only drops or reorders candidates, and the same inputs
/// always produce the same output.
#[derive(Debug, Clone)]
pub struct Discovery {
    synonyms: SynonymTable,
    weights: FieldWeights,
}

impl Discovery {
    pub fn new(synonyms: SynonymTable, weights: FieldWeights) -> Self {
        Self { synonyms, weights }
    }

    pub fn with_defaults() -> Self {
        Self::new(SynonymTable::default(), FieldWeights::default())
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn weights(&self) -> &FieldWeights {
        &self.weights
    }

    /// Rank candidates against a raw text query
    ///
    /// Non-blank queries return at most ten positive-score hits, best first.
    /// A blank query returns every candidate with a neutral score.
    pub fn search<'a>(&self, query: &str, candidates: &'a [Candidate]) -> Vec<ScoredCandidate<'a>> {
        let tokens = self.synonyms.expand(query);
        rank_by_relevance(&tokens, candidates, &self.weights)
    }

    /// Apply filter criteria, preserving order
    pub fn filter<'a>(&self, candidates: &'a [Candidate], criteria: &FilterCriteria) -> Vec<&'a Candidate> {
        apply_filters(candidates, criteria)
    }

    /// Run the full pipeline
    pub fn discover<'a>(&self, query: &DiscoveryQuery, candidates: &'a [Candidate]) -> DiscoveryResult<'a> {
        let total_candidates = candidates.len();

        // Stage 1: text search
        let mut working = self.search(&query.text, candidates);
        let searched = working.len();

        // Stage 2: filter criteria
        working.retain(|scored| matches_criteria(scored.candidate, &query.criteria));
        let filtered = working.len();

        // Stage 3: proximity sort
        let user_location = query.user_location.filter(Coordinates::is_finite);
        let mut results: Vec<RankedCandidate<'a>> = working
            .into_iter()
            .map(|scored| {
                let distance_km = user_location.and_then(|origin| {
                    scored
                        .candidate
                        .known_coordinates()
                        .map(|point| distance_km(&origin, &point))
                });
                RankedCandidate { scored, distance_km }
            })
            .collect();

        if user_location.is_some() {
            results.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
        }

        // Stage 4: map constraint
        if let Some(constraint) = &query.constraint {
            results.retain(|ranked| satisfies_constraint(ranked.candidate(), constraint));
        }

        let stages = StageCounts {
            searched,
            filtered,
            constrained: results.len(),
        };

        tracing::debug!(
            "Discovery over {} candidates: {} after search, {} after filters, {} after geo constraint",
            total_candidates,
            stages.searched,
            stages.filtered,
            stages.constrained
        );

        DiscoveryResult {
            results,
            total_candidates,
            stages,
        }
    }
}

impl Default for Discovery {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Nearest first; candidates without a location go last
fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Candidates without usable coordinates never satisfy a map constraint
fn satisfies_constraint(candidate: &Candidate, constraint: &GeoConstraint) -> bool {
    let Some(point) = candidate.known_coordinates() else {
        return false;
    };

    match constraint {
        GeoConstraint::Radius { center, radius_meters } => {
            center.is_finite() && distance_km(center, &point) * 1000.0 <= *radius_meters
        }
        GeoConstraint::Bounds(bounds) => within_bounds(&point, bounds),
    }
}
