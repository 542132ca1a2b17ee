use serde::{Deserialize, Serialize};

use crate::number::{WirePoint, count};

/// Body of the walking-route call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRouteRequest {
    pub parking_name: String,
    pub building_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkRouteResponse {
    #[serde(default)]
    pub building_name: Option<String>,

    #[serde(default)]
    pub route: Vec<WirePoint>,

    #[serde(default)]
    pub total_distance_m: Option<f64>,
    #[serde(default)]
    pub total_distance_miles: Option<f64>,

    #[serde(default, deserialize_with = "count")]
    pub walk_time_hours: u32,
    #[serde(default, deserialize_with = "count")]
    pub walk_time_minutes: u32,
    #[serde(default, deserialize_with = "count")]
    pub walk_time_seconds: u32,
}
