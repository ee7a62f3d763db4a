//! Workshop Discovery - search and ranking pipeline for the vehicle-service marketplace
//!
//! This library provides the discovery core used by the marketplace front end:
//! fuzzy text search with synonym expansion, filter criteria, and geo
//! proximity ranking, plus a thin HTTP service exposing them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{distance_km, radius_from_zoom, within_bounds, Discovery, DiscoveryQuery, SynonymTable};
pub use error::AppError;
pub use models::{Candidate, Coordinates, FieldWeights, FilterCriteria, GeoConstraint, MapBounds, ScoredCandidate};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let radius = radius_from_zoom(8.0);
        assert_eq!(radius, 40_000.0);

        let discovery = Discovery::default();
        assert!(discovery.search("", &[]).is_empty());
    }
}
