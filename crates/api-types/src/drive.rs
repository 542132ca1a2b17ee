use serde::{Deserialize, Serialize};

use crate::number::{WirePoint, count, finite};

/// Body of the driving-estimate call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriveEstimateRequest {
    pub lat: f64,
    pub long: f64,
    /// Facility id the route ends at
    pub dest: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveEstimateResponse {
    /// Set instead of the estimate when the upstream router rejected the request
    #[serde(default)]
    pub error: Option<String>,

    /// Distance in miles
    #[serde(default, deserialize_with = "finite")]
    pub distance: Option<f64>,

    #[serde(default, deserialize_with = "count")]
    pub travel_time_hr: u32,
    #[serde(default, deserialize_with = "count")]
    pub travel_time_minutes: u32,
    #[serde(default, deserialize_with = "count")]
    pub travel_time_sec: u32,

    /// Minutes to find a spot at the facility
    #[serde(default, deserialize_with = "finite")]
    pub total_time_parking: Option<f64>,

    #[serde(default)]
    pub route: Option<DriveRoute>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveRoute {
    #[serde(default)]
    pub routes: Vec<RouteCandidate>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    #[serde(default)]
    pub points: Vec<WirePoint>,
}

impl DriveEstimateResponse {
    /// Waypoints of the first leg of the first candidate path, if any
    pub fn first_path_points(&self) -> &[WirePoint] {
        self.route
            .as_ref()
            .and_then(|route| route.routes.first())
            .and_then(|candidate| candidate.legs.first())
            .map(|leg| leg.points.as_slice())
            .unwrap_or_default()
    }
}
