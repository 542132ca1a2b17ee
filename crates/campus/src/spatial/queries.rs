//! Spatial query utilities for distance calculations.
//!
//! Uses Haversine formula for accurate distances on Earth's surface.

use geo::{Distance, Haversine, Point};

use crate::models::types::Coordinate;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    Haversine.distance(p1, p2)
}

/// Total length of a coordinate sequence in meters
pub fn path_length_meters(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| haversine_distance(pair[0].into(), pair[1].into()))
        .sum()
}

/// Convert meters to degrees at equator (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / 111_320.0
}
