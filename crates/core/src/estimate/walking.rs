use api_types::{WalkRouteRequest, WalkRouteResponse};
use reqwest::{Client, Url};
use titan_rush_campus::{
    BoxFuture, Collaborator, Leg, LegEstimator, LegKind, PedestrianLegParams, Result,
    TravelDuration,
};
use tracing::debug;

use super::normalize_route;
use crate::http::post_json;

/// Pedestrian leg: the chosen facility to the destination building
#[derive(Clone, Debug)]
pub struct WalkingEstimator {
    client: Client,
    url: Url,
}

impl WalkingEstimator {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl LegEstimator for WalkingEstimator {
    type Params = PedestrianLegParams;

    fn estimate_leg<'a>(&'a self, params: &'a PedestrianLegParams) -> BoxFuture<'a, Result<Leg>> {
        Box::pin(async move {
            let request = WalkRouteRequest {
                parking_name: params.facility.to_string(),
                building_name: params.building.to_string(),
            };

            let response: WalkRouteResponse =
                post_json(&self.client, &self.url, Collaborator::WalkingRoute, &request).await?;

            let leg = Leg {
                kind: LegKind::Pedestrian,
                coordinates: normalize_route(&response.route),
                duration: TravelDuration::new(
                    response.walk_time_hours,
                    response.walk_time_minutes,
                    response.walk_time_seconds,
                ),
                extra: None,
            };

            debug!(
                facility = %params.facility,
                building = %params.building,
                points = leg.coordinates.len(),
                duration = %leg.duration,
                "pedestrian leg estimated"
            );
            Ok(leg)
        })
    }
}
