use titan_rush_core::campus::Coordinate;
use titan_rush_core::{PlanOutcome, TripSession, fit_region_with_padding};
use tracing::debug;

use crate::error::PlannerError;
use crate::records::{LegRecord, TripRequestRecord, TripResultRecord};

/// Planning for one mounted trip screen. Only the latest `plan` call
/// delivers a result; older ones resolve to `None`.
#[derive(uniffi::Object)]
pub struct TripScreen {
    session: TripSession,
    padding_deg: f64,
}

impl TripScreen {
    pub(crate) fn new(session: TripSession, padding_deg: f64) -> Self {
        Self {
            session,
            padding_deg,
        }
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl TripScreen {
    pub async fn plan(
        &self,
        request: TripRequestRecord,
    ) -> Result<Option<TripResultRecord>, PlannerError> {
        let result = match self.session.plan_located(request.into_request()).await {
            PlanOutcome::Completed(result) => result?,
            PlanOutcome::Superseded => return Ok(None),
        };

        let route: Vec<Coordinate> = result
            .vehicle_leg
            .coordinates
            .iter()
            .chain(&result.pedestrian_leg.coordinates)
            .copied()
            .collect();

        Ok(Some(TripResultRecord {
            vehicle_leg: LegRecord::from(&result.vehicle_leg),
            pedestrian_leg: LegRecord::from(&result.pedestrian_leg),
            total_duration: result.total_duration.into(),
            leave_by: result.leave_by_display(),
            region: fit_region_with_padding(&route, self.padding_deg).map(Into::into),
        }))
    }

    /// The screen is going away; any plan in flight resolves to `None`
    pub fn unmount(&self) {
        debug!("trip screen unmounted");
        self.session.invalidate();
    }
}
