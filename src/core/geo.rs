use crate::models::{Coordinates, MapBounds};

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Smallest search radius handed to the map, in meters
pub const MIN_RADIUS_METERS: f64 = 500.0;

/// Largest search radius handed to the map, in meters
pub const MAX_RADIUS_METERS: f64 = 50_000.0;

/// Radius at `REFERENCE_ZOOM`; halves with each zoom level above it
const REFERENCE_RADIUS_METERS: f64 = 40_000.0;
const REFERENCE_ZOOM: f64 = 8.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Distance in kilometers. Symmetric, never negative, and zero for
/// identical points.
#[inline]
pub fn distance_km(a: &Coordinates, b: &Coordinates) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Derive a search radius in meters from a map zoom level
///
/// `radius = 40000 / 2^(zoom - 8)`, clamped to `[500, 50000]`. Any input
/// is accepted; a NaN zoom yields the widest radius.
pub fn radius_from_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MAX_RADIUS_METERS;
    }

    let radius = REFERENCE_RADIUS_METERS / 2f64.powf(zoom - REFERENCE_ZOOM);
    radius.clamp(MIN_RADIUS_METERS, MAX_RADIUS_METERS)
}

/// Check if a point lies inside map bounds (edges inclusive)
///
/// When `west > east` the bounds wrap across the antimeridian and the
/// valid longitudes are `[west, 180] ∪ [-180, east]`.
#[inline]
pub fn within_bounds(point: &Coordinates, bounds: &MapBounds) -> bool {
    if point.latitude < bounds.south || point.latitude > bounds.north {
        return false;
    }

    let lon = point.longitude;
    if bounds.west <= bounds.east {
        lon >= bounds.west && lon <= bounds.east
    } else {
        (lon >= bounds.west && lon <= 180.0) || (lon >= -180.0 && lon <= bounds.east)
    }
}
