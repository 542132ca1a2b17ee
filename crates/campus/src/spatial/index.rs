//! R-tree nodes for spatial indexing.
//!
//! The R-tree works in raw degrees, so queries use it as a coarse filter
//! and apply the Haversine distance to the candidates it returns.

use std::sync::Arc;

use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::types::Facility;

#[derive(Clone)]
pub struct FacilityNode {
    pub facility: Arc<Facility>,
    point: [f64; 2],
}

impl FacilityNode {
    pub fn new(facility: Arc<Facility>) -> Self {
        let point = [facility.location.longitude(), facility.location.latitude()];
        Self { facility, point }
    }
}

impl RTreeObject for FacilityNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FacilityNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}
