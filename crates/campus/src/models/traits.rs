//! Core traits for campus reference data.
//!
//! These traits define the public interface for facility and building
//! lookups. Implementations can be in-memory, database-backed, or remote.

use geo::Point;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::types::*;

/// Provider of all campus reference data with lookup and query methods
pub trait CampusProvider: Send + Sync {
    // ---- Lookups ----
    fn facility(&self, id: &FacilityIdentifier) -> Option<Arc<Facility>>;
    fn building(&self, id: &BuildingIdentifier) -> Option<Arc<Building>>;

    // ---- Collections ----
    fn all_facilities(&self) -> Vec<Arc<Facility>>;
    fn all_buildings(&self) -> Vec<Arc<Building>>;

    // ---- Spatial queries ----

    /// Find facilities within radius (meters)
    fn facilities_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Facility>>;

    /// The N facilities closest to a point, nearest first
    fn nearest_facilities(&self, point: Point, n: usize) -> Vec<Arc<Facility>>;
}
