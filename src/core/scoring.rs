use std::collections::BTreeSet;

use crate::core::fuzzy::match_strength;
use crate::core::synonyms::{tokenize, QueryTokens};
use crate::models::{Candidate, FieldWeights, MatchedField, ScoredCandidate, Specialty};

/// Most search hits returned for a non-empty query
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Score given to every candidate when the query is empty
pub const NEUTRAL_SCORE: f64 = 1.0;

/// Tokenized text fields of one candidate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFields {
    pub name: Vec<String>,
    pub tags: Vec<String>,
    pub location: Vec<String>,
}

impl CandidateFields {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: tokenize(&candidate.name),
            tags: candidate
                .specialties
                .iter()
                .map(Specialty::display_text)
                .flat_map(tokenize)
                .collect(),
            location: tokenize(&candidate.location),
        }
    }

    fn fields(&self) -> [(MatchedField, &[String]); 3] {
        [
            (MatchedField::Name, self.name.as_slice()),
            (MatchedField::Tag, self.tags.as_slice()),
            (MatchedField::Location, self.location.as_slice()),
        ]
    }
}

/// Accumulated relevance of one candidate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldScore {
    pub score: f64,
    pub matched_fields: BTreeSet<MatchedField>,
}

/// Score a candidate's fields against the expanded query tokens
///
/// Every (query token, field token) pair with a non-zero match strength
/// adds `strength * field weight` and marks the field as matched.
pub fn score_candidate(tokens: &QueryTokens, fields: &CandidateFields, weights: &FieldWeights) -> FieldScore {
    let mut result = FieldScore::default();

    for token in tokens {
        for (field, field_tokens) in fields.fields() {
            let weight = weights.weight(field);
            for field_token in field_tokens {
                let strength = match_strength(token, field_token);
                if strength.is_match() {
                    result.score += strength.value() * weight;
                    result.matched_fields.insert(field);
                }
            }
        }
    }

    result
}

/// Rank candidates by relevance to the expanded query
///
/// Keeps only positive scores, sorts descending with ties left in input
/// order, and caps the list at `MAX_SEARCH_RESULTS`. An empty token set
/// passes every candidate through with `NEUTRAL_SCORE`.
pub fn rank_by_relevance<'a>(
    tokens: &QueryTokens,
    candidates: &'a [Candidate],
    weights: &FieldWeights,
) -> Vec<ScoredCandidate<'a>> {
    if tokens.is_empty() {
        return candidates
            .iter()
            .map(|candidate| ScoredCandidate {
                candidate,
                score: NEUTRAL_SCORE,
                matched_fields: BTreeSet::new(),
            })
            .collect();
    }

    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .filter_map(|candidate| {
            let fields = CandidateFields::from_candidate(candidate);
            let FieldScore { score, matched_fields } = score_candidate(tokens, &fields, weights);

            (score > 0.0).then_some(ScoredCandidate {
                candidate,
                score,
                matched_fields,
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep their input order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(MAX_SEARCH_RESULTS);

    scored
}
