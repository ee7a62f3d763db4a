// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Candidate, Coordinates, FieldWeights, FilterCriteria, GeoConstraint, MapBounds, MatchedField,
    ScoredCandidate, Specialty, SpecialtyTag,
};
pub use requests::{DiscoverRequest, FilterRequest, RadiusQuery, SearchRequest, Viewport};
pub use responses::{
    CategoriesResponse, DiscoverResponse, ErrorResponse, FilterResponse, HealthResponse, RadiusResponse,
    SearchResponse,
};
