//! In-memory campus provider.
//!
//! Stores facilities and buildings in memory with an R-tree over facility
//! locations for radius queries.

use std::collections::HashMap;
use std::sync::Arc;

use geo::Point;
use rstar::RTree;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::index::FacilityNode;
use crate::spatial::queries::{haversine_distance, meters_to_degrees_approx};

/// In-memory campus provider with spatial indexing
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone)]
pub struct StaticCampusProvider {
    // Core data
    facilities: Vec<Arc<Facility>>,
    buildings: Vec<Arc<Building>>,

    // Lookup maps
    facility_map: HashMap<FacilityIdentifier, Arc<Facility>>,
    building_map: HashMap<BuildingIdentifier, Arc<Building>>,

    // Spatial index
    facility_tree: RTree<FacilityNode>,
}

impl StaticCampusProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self {
            facilities: Vec::new(),
            buildings: Vec::new(),
            facility_map: HashMap::new(),
            building_map: HashMap::new(),
            facility_tree: RTree::new(),
        }
    }

    /// Build provider from raw data
    pub fn from_data(facilities: Vec<Facility>, buildings: Vec<Building>) -> Self {
        let facilities: Vec<Arc<Facility>> = facilities.into_iter().map(Arc::new).collect();
        let buildings: Vec<Arc<Building>> = buildings.into_iter().map(Arc::new).collect();

        let facility_map: HashMap<_, _> = facilities
            .iter()
            .map(|f| (f.id.clone(), f.clone()))
            .collect();

        let building_map: HashMap<_, _> = buildings
            .iter()
            .map(|b| (b.id.clone(), b.clone()))
            .collect();

        let facility_tree =
            RTree::bulk_load(facilities.iter().cloned().map(FacilityNode::new).collect());

        Self {
            facilities,
            buildings,
            facility_map,
            building_map,
            facility_tree,
        }
    }

    /// Facilities ordered by straight-line distance to a building, nearest first
    pub fn suggest_facilities_for(
        &self,
        building: &BuildingIdentifier,
        n: usize,
    ) -> Result<Vec<Arc<Facility>>> {
        let building = self
            .building(building)
            .ok_or_else(|| PlanError::BuildingNotFound(building.clone()))?;

        Ok(self.nearest_facilities(building.location.into(), n))
    }
}

impl Default for StaticCampusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CampusProvider for StaticCampusProvider {
    fn facility(&self, id: &FacilityIdentifier) -> Option<Arc<Facility>> {
        self.facility_map.get(id).cloned()
    }

    fn building(&self, id: &BuildingIdentifier) -> Option<Arc<Building>> {
        self.building_map.get(id).cloned()
    }

    fn all_facilities(&self) -> Vec<Arc<Facility>> {
        self.facilities.clone()
    }

    fn all_buildings(&self) -> Vec<Arc<Building>> {
        self.buildings.clone()
    }

    fn facilities_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Facility>> {
        // Validate radius is positive
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        // A degree of longitude shrinks away from the equator; widen the
        // coarse search so the Haversine pass sees every candidate.
        let radius_deg =
            meters_to_degrees_approx(radius_m) / point.y().to_radians().cos().max(0.01);

        let mut found: Vec<(f64, Arc<Facility>)> = self
            .facility_tree
            .locate_within_distance([point.x(), point.y()], radius_deg * radius_deg)
            .map(|node| {
                let distance = haversine_distance(point, node.facility.location.into());
                (distance, node.facility.clone())
            })
            .filter(|(distance, _)| *distance <= radius_m)
            .collect();

        found.sort_by(|a, b| a.0.total_cmp(&b.0));
        found.into_iter().map(|(_, facility)| facility).collect()
    }

    fn nearest_facilities(&self, point: Point, n: usize) -> Vec<Arc<Facility>> {
        // Campus catalogs are small; rank every facility by true distance
        // rather than by raw-degree R-tree distance.
        let mut ranked: Vec<(f64, &Arc<Facility>)> = self
            .facilities
            .iter()
            .map(|f| (haversine_distance(point, f.location.into()), f))
            .collect();

        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.into_iter().take(n).map(|(_, f)| f.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(id: &str, lat: f64, lon: f64) -> Facility {
        Facility {
            id: FacilityIdentifier::new(id),
            display_name: id.to_owned(),
            occupancy_key: id.to_owned(),
            location: Coordinate::new(lat, lon).unwrap(),
        }
    }

    #[test]
    fn test_empty_provider() {
        let provider = StaticCampusProvider::new();
        assert_eq!(provider.all_facilities().len(), 0);
        assert_eq!(provider.all_buildings().len(), 0);
        assert!(provider
            .nearest_facilities(Point::new(-117.88, 33.88), 3)
            .is_empty());
    }

    #[test]
    fn test_provider_lookups() {
        let building = Building {
            id: BuildingIdentifier::new("b1"),
            display_name: "Test Hall".into(),
            location: Coordinate::new(33.88, -117.885).unwrap(),
        };

        let provider =
            StaticCampusProvider::from_data(vec![facility("f1", 33.88, -117.88)], vec![building]);

        assert!(provider.facility(&FacilityIdentifier::new("f1")).is_some());
        assert!(provider.building(&BuildingIdentifier::new("b1")).is_some());
        assert!(provider.facility(&FacilityIdentifier::new("nope")).is_none());
    }

    #[test]
    fn test_facilities_near() {
        let provider = StaticCampusProvider::from_data(
            vec![
                facility("west", 33.8790, -117.8886),
                facility("east", 33.8810, -117.8818),
            ],
            vec![],
        );

        let origin = Point::new(-117.8886, 33.8791);
        let close: Vec<_> = provider
            .facilities_near(origin, 100.0)
            .iter()
            .map(|f| f.id.to_string())
            .collect();
        assert_eq!(close, vec!["west"]);

        // ~630 m of longitude at this latitude is ~0.0068 degrees
        let both: Vec<_> = provider
            .facilities_near(origin, 800.0)
            .iter()
            .map(|f| f.id.to_string())
            .collect();
        assert_eq!(both, vec!["west", "east"]);

        assert!(provider.facilities_near(origin, -5.0).is_empty());
        assert!(provider.facilities_near(origin, f64::NAN).is_empty());
    }

    #[test]
    fn test_nearest_facilities_order() {
        let provider = StaticCampusProvider::from_data(
            vec![
                facility("far", 33.8900, -117.8800),
                facility("near", 33.8801, -117.8851),
                facility("mid", 33.8830, -117.8850),
            ],
            vec![],
        );

        let order: Vec<_> = provider
            .nearest_facilities(Point::new(-117.8850, 33.8800), 2)
            .iter()
            .map(|f| f.id.to_string())
            .collect();

        assert_eq!(order, vec!["near", "mid"]);
    }

    #[test]
    fn test_suggest_unknown_building() {
        let provider = StaticCampusProvider::new();
        let err = provider
            .suggest_facilities_for(&BuildingIdentifier::new("nowhere"), 2)
            .unwrap_err();
        assert_eq!(err, PlanError::BuildingNotFound(BuildingIdentifier::new("nowhere")));
    }
}
