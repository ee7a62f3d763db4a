use serde::Serialize;

use crate::core::discovery::RankedCandidate;
use crate::models::domain::{Candidate, ScoredCandidate};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<'a> {
    pub results: Vec<ScoredCandidate<'a>>,
    pub total_candidates: usize,
}

/// Response for the filter endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FilterResponse<'a> {
    pub results: Vec<&'a Candidate>,
    pub total_candidates: usize,
}

/// Response for the discover endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DiscoverResponse<'a> {
    pub request_id: uuid::Uuid,
    pub results: Vec<RankedCandidate<'a>>,
    pub total_candidates: usize,
}

/// Known service categories for the filter UI
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse<'a> {
    pub categories: &'a [String],
}

/// Search radius derived from a zoom level
#[derive(Debug, Clone, Serialize)]
pub struct RadiusResponse {
    pub zoom: f64,
    pub radius_meters: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
