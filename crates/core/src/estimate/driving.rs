use api_types::{DriveEstimateRequest, DriveEstimateResponse};
use reqwest::{Client, Url};
use titan_rush_campus::{
    BoxFuture, Collaborator, Leg, LegEstimator, LegKind, PlanError, Result, TravelDuration,
    VehicleLegParams,
};
use tracing::debug;

use super::normalize_route;
use crate::http::post_json;

/// Vehicle leg: user's position to the chosen facility
#[derive(Clone, Debug)]
pub struct DrivingEstimator {
    client: Client,
    url: Url,
}

impl DrivingEstimator {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl LegEstimator for DrivingEstimator {
    type Params = VehicleLegParams;

    fn estimate_leg<'a>(&'a self, params: &'a VehicleLegParams) -> BoxFuture<'a, Result<Leg>> {
        Box::pin(async move {
            let request = DriveEstimateRequest {
                lat: params.origin.latitude(),
                long: params.origin.longitude(),
                dest: params.facility.to_string(),
            };

            let response: DriveEstimateResponse = post_json(
                &self.client,
                &self.url,
                Collaborator::DrivingEstimate,
                &request,
            )
            .await?;

            let leg = vehicle_leg(response)?;
            debug!(
                facility = %params.facility,
                points = leg.coordinates.len(),
                duration = %leg.duration,
                "vehicle leg estimated"
            );
            Ok(leg)
        })
    }
}

fn vehicle_leg(response: DriveEstimateResponse) -> Result<Leg> {
    if let Some(message) = response.error {
        return Err(PlanError::network(Collaborator::DrivingEstimate, message));
    }

    Ok(Leg {
        kind: LegKind::Vehicle,
        coordinates: normalize_route(response.first_path_points()),
        duration: TravelDuration::new(
            response.travel_time_hr,
            response.travel_time_minutes,
            response.travel_time_sec,
        ),
        extra: response.total_time_parking.filter(|m| m.is_finite()),
    })
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use titan_rush_campus::{Coordinate, FacilityIdentifier};

    use super::*;
    use crate::test_support::{client, serve};

    fn params() -> VehicleLegParams {
        VehicleLegParams {
            origin: Coordinate::new(33.8700, -117.9000).unwrap(),
            facility: FacilityIdentifier::new("Nutwood"),
        }
    }

    async fn estimator(router: Router) -> DrivingEstimator {
        let base = serve(router).await;
        DrivingEstimator::new(client(), base.join("estimate").unwrap())
    }

    #[tokio::test]
    async fn test_vehicle_leg() {
        let router = Router::new().route(
            "/estimate",
            post(|Json(body): Json<Value>| async move {
                if body["dest"] != "Nutwood" {
                    return Err(StatusCode::NOT_FOUND);
                }

                Ok(Json(json!({
                    "distance": 1.4,
                    "travel_time_hr": 0,
                    "travel_time_minutes": "12",
                    "travel_time_sec": 5,
                    "total_time_parking": 4.5,
                    "route": {"routes": [{"legs": [{"points": [
                        {"latitude": body["lat"], "longitude": body["long"]},
                        {"latitude": "not a number", "longitude": -117.8950},
                        {"latitude": 33.8792, "longitude": -117.8885}
                    ]}]}]}
                })))
            }),
        );

        let leg = estimator(router).await.estimate_leg(&params()).await.unwrap();

        assert_eq!(leg.kind, LegKind::Vehicle);
        assert_eq!(leg.duration, TravelDuration::new(0, 12, 5));
        assert_eq!(leg.extra, Some(4.5));
        assert_eq!(
            leg.coordinates,
            vec![
                Coordinate::new(33.8700, -117.9000).unwrap(),
                Coordinate::new(33.8792, -117.8885).unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_route_is_empty_leg() {
        let router = Router::new().route(
            "/estimate",
            post(|| async { Json(json!({"travel_time_minutes": 7})) }),
        );

        let leg = estimator(router).await.estimate_leg(&params()).await.unwrap();

        assert!(!leg.is_routable());
        assert_eq!(leg.duration, TravelDuration::new(0, 7, 0));
        assert_eq!(leg.extra, None);
    }

    #[tokio::test]
    async fn test_error_body_is_network_failure() {
        let router = Router::new().route(
            "/estimate",
            post(|| async { Json(json!({"error": "no route to destination"})) }),
        );

        let err = estimator(router).await.estimate_leg(&params()).await.unwrap_err();

        assert_eq!(
            err,
            PlanError::network(Collaborator::DrivingEstimate, "no route to destination")
        );
    }

    #[tokio::test]
    async fn test_server_error_is_network_failure() {
        let router = Router::new().route(
            "/estimate",
            post(|| async { StatusCode::BAD_GATEWAY }),
        );

        let err = estimator(router).await.estimate_leg(&params()).await.unwrap_err();

        assert!(matches!(
            err,
            PlanError::Network {
                collaborator: Collaborator::DrivingEstimate,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_network_failure() {
        let router = Router::new().route("/estimate", post(|| async { "<html>oops</html>" }));

        let err = estimator(router).await.estimate_leg(&params()).await.unwrap_err();
        assert_eq!(err.kind(), titan_rush_campus::ErrorKind::Network);
    }
}
