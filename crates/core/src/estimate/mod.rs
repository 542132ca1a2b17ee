//! Remote leg estimators.
//!
//! Both estimators make exactly one POST per leg and hold no state between
//! calls. Route geometry from the wire is filtered down to finite
//! coordinates before it reaches the domain model.

mod driving;
mod walking;

use api_types::WirePoint;
use titan_rush_campus::Coordinate;
use tracing::debug;

pub use driving::DrivingEstimator;
pub use walking::WalkingEstimator;

/// Keep only points whose latitude and longitude are both finite numbers,
/// preserving order
pub fn normalize_route(points: &[WirePoint]) -> Vec<Coordinate> {
    let route: Vec<Coordinate> = points
        .iter()
        .filter_map(|p| Coordinate::new(p.latitude.as_finite()?, p.longitude.as_finite()?))
        .collect();

    let dropped = points.len() - route.len();
    if dropped > 0 {
        debug!(dropped, kept = route.len(), "dropped non-numeric route points");
    }

    route
}
