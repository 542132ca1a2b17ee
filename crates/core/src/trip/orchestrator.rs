use std::sync::Arc;

use reqwest::Client;
use titan_rush_campus::{
    ClockTime, LegEstimator, PedestrianLegParams, Result, VehicleLegParams,
    backsolve_leave_time,
};
use tracing::{debug, info};

use super::{TripRequest, TripResult};
use crate::config::{ConfigError, PlannerConfig};
use crate::estimate::{DrivingEstimator, WalkingEstimator};

pub type VehicleEstimator = dyn LegEstimator<Params = VehicleLegParams>;
pub type PedestrianEstimator = dyn LegEstimator<Params = PedestrianLegParams>;

/// Runs both leg estimates for a request and combines them
#[derive(Clone)]
pub struct TripOrchestrator {
    vehicle: Arc<VehicleEstimator>,
    pedestrian: Arc<PedestrianEstimator>,
}

impl TripOrchestrator {
    pub fn new(vehicle: Arc<VehicleEstimator>, pedestrian: Arc<PedestrianEstimator>) -> Self {
        Self {
            vehicle,
            pedestrian,
        }
    }

    /// HTTP estimators sharing one client
    pub fn from_config(
        config: &PlannerConfig,
        client: Client,
    ) -> std::result::Result<Self, ConfigError> {
        let vehicle = DrivingEstimator::new(client.clone(), config.drive_estimate_url()?);
        let pedestrian = WalkingEstimator::new(client, config.walk_route_url()?);
        Ok(Self::new(Arc::new(vehicle), Arc::new(pedestrian)))
    }

    /// Validate, estimate both legs concurrently and backsolve the
    /// leave-by time.
    ///
    /// An incomplete request fails before any remote call. If either
    /// estimate fails the other is dropped and the whole plan fails.
    pub async fn plan_trip(&self, request: &TripRequest) -> Result<TripResult> {
        let validated = request.validate()?;

        debug!(
            facility = %validated.vehicle.facility,
            building = %validated.pedestrian.building,
            arrival = validated.arrival,
            "planning trip"
        );

        let (vehicle_leg, pedestrian_leg) = tokio::try_join!(
            self.vehicle.estimate_leg(&validated.vehicle),
            self.pedestrian.estimate_leg(&validated.pedestrian),
        )?;

        let total_duration = vehicle_leg.duration + pedestrian_leg.duration;
        let leave_by = validated
            .arrival
            .parse::<ClockTime>()
            .ok()
            .and_then(|arrival| backsolve_leave_time(&arrival, &total_duration));

        info!(
            total = %total_duration,
            leave_by = ?leave_by.map(|t| t.to_string()),
            "trip planned"
        );

        Ok(TripResult {
            vehicle_leg,
            pedestrian_leg,
            total_duration,
            leave_by,
        })
    }
}
