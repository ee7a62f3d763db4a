use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{radius_from_zoom, Discovery, DiscoveryQuery};
use crate::error::AppError;
use crate::models::{
    CategoriesResponse, DiscoverRequest, DiscoverResponse, FilterRequest, FilterResponse, HealthResponse,
    RadiusQuery, RadiusResponse, SearchRequest, SearchResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub discovery: Arc<Discovery>,
    pub categories: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(discovery: Discovery, categories: Vec<String>) -> Self {
        Self {
            discovery: Arc::new(discovery),
            categories: Arc::new(categories),
        }
    }
}

/// Configure all discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(categories))
        .route("/geo/radius", web::get().to(radius))
        .route("/workshops/search", web::post().to(search))
        .route("/workshops/filter", web::post().to(filter))
        .route("/workshops/discover", web::post().to(discover));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Category labels offered by the filter UI
///
/// GET /api/v1/categories
async fn categories(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: &state.categories,
    })
}

/// Search radius for a map zoom level
///
/// GET /api/v1/geo/radius?zoom=13
async fn radius(query: web::Query<RadiusQuery>) -> impl Responder {
    HttpResponse::Ok().json(RadiusResponse {
        zoom: query.zoom,
        radius_meters: radius_from_zoom(query.zoom),
    })
}

/// Text search endpoint
///
/// POST /api/v1/workshops/search
///
/// Request body:
/// ```json
/// {
///   "query": "tyre",
///   "candidates": [{ "id": "w1", "name": "Ali's Tyre Shop", "specialties": ["Tires"] }]
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let results = state.discovery.search(&req.query, &req.candidates);

    tracing::info!(
        "Search {:?} matched {} of {} candidates",
        req.query,
        results.len(),
        req.candidates.len()
    );

    Ok(HttpResponse::Ok().json(SearchResponse {
        results,
        total_candidates: req.candidates.len(),
    }))
}

/// Filter endpoint
///
/// POST /api/v1/workshops/filter
///
/// Request body:
/// ```json
/// {
///   "candidates": [...],
///   "criteria": { "categories": ["tyre"], "minRating": 4, "maxPrice": 1000 }
/// }
/// ```
async fn filter(
    state: web::Data<AppState>,
    req: web::Json<FilterRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let results = state.discovery.filter(&req.candidates, &req.criteria);

    tracing::debug!("Filter kept {} of {} candidates", results.len(), req.candidates.len());

    Ok(HttpResponse::Ok().json(FilterResponse {
        results,
        total_candidates: req.candidates.len(),
    }))
}

/// Full discovery endpoint
///
/// POST /api/v1/workshops/discover
///
/// Request body:
/// ```json
/// {
///   "query": "aircon",
///   "candidates": [...],
///   "criteria": { "minRating": 4 },
///   "userLocation": { "lat": 3.139, "lng": 101.6869 },
///   "viewport": { "center": { "lat": 3.139, "lng": 101.6869 }, "zoom": 13 }
/// }
/// ```
async fn discover(
    state: web::Data<AppState>,
    req: web::Json<DiscoverRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate()?;

    let request_id = uuid::Uuid::new_v4();
    let req = req.into_inner();

    let query = DiscoveryQuery {
        constraint: req.geo_constraint(),
        text: req.query,
        criteria: req.criteria,
        user_location: req.user_location,
    };

    let result = state.discovery.discover(&query, &req.candidates);

    tracing::info!(
        "Discovery {} returning {} of {} candidates (map mode: {})",
        request_id,
        result.results.len(),
        result.total_candidates,
        query.constraint.is_some()
    );

    Ok(HttpResponse::Ok().json(DiscoverResponse {
        request_id,
        results: result.results,
        total_candidates: result.total_candidates,
    }))
}
