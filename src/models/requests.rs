use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::geo::radius_from_zoom;
use crate::models::domain::{Candidate, Coordinates, FilterCriteria, GeoConstraint, MapBounds};

/// Request to run text search over a candidate set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(max = 256))]
    #[serde(default)]
    pub query: String,
    #[validate(length(max = 5000))]
    pub candidates: Vec<Candidate>,
}

/// Request to apply filter criteria to a candidate set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterRequest {
    #[validate(length(max = 5000))]
    pub candidates: Vec<Candidate>,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: FilterCriteria,
}

/// Map viewport as reported by the map collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Viewport {
    pub center: Coordinates,
    #[serde(default)]
    pub zoom: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "radiusMeters", alias = "radius_meters", default)]
    pub radius_meters: Option<f64>,
}

impl Viewport {
    /// Viewport whose radius is derived from the map zoom level
    pub fn from_zoom(center: Coordinates, zoom: f64) -> Self {
        Self {
            center,
            zoom: Some(zoom),
            radius_meters: None,
        }
    }

    /// Radius constraint for this viewport. An explicit radius wins over
    /// the zoom-derived one; with neither, there is nothing to constrain.
    pub fn constraint(&self) -> Option<GeoConstraint> {
        let radius_meters = self.radius_meters.or_else(|| self.zoom.map(radius_from_zoom))?;
        Some(GeoConstraint::Radius {
            center: self.center,
            radius_meters,
        })
    }
}

/// Full discovery request: search, filter, proximity sort and map constraint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverRequest {
    #[validate(length(max = 256))]
    #[serde(default)]
    pub query: String,
    #[validate(length(max = 5000))]
    pub candidates: Vec<Candidate>,
    #[validate(nested)]
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(rename = "userLocation", alias = "user_location", default)]
    pub user_location: Option<Coordinates>,
    #[validate(nested)]
    #[serde(default)]
    pub viewport: Option<Viewport>,
    #[serde(default)]
    pub bounds: Option<MapBounds>,
}

impl DiscoverRequest {
    /// Map constraint requested by the client. A viewport radius takes
    /// precedence over a bounds rectangle.
    pub fn geo_constraint(&self) -> Option<GeoConstraint> {
        self.viewport
            .as_ref()
            .and_then(Viewport::constraint)
            .or(self.bounds.map(GeoConstraint::Bounds))
    }
}

/// Query string for the zoom-to-radius endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadiusQuery {
    pub zoom: f64,
}
