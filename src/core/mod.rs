// Core algorithm exports
pub mod discovery;
pub mod filters;
pub mod fuzzy;
pub mod geo;
pub mod scoring;
pub mod synonyms;

pub use discovery::{Discovery, DiscoveryQuery, DiscoveryResult, RankedCandidate, StageCounts};
pub use filters::{apply_filters, matches_criteria, UNBOUNDED_PRICE_SENTINEL};
pub use fuzzy::{levenshtein_distance, match_strength, MatchStrength};
pub use geo::{distance_km, radius_from_zoom, within_bounds};
pub use scoring::{rank_by_relevance, score_candidate, CandidateFields, MAX_SEARCH_RESULTS};
pub use synonyms::{tokenize, QueryTokens, SynonymTable};
