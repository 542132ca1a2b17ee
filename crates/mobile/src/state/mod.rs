use std::sync::Arc;

use titan_rush_core::campus::{BuildingIdentifier, CampusProvider, StaticCampusProvider};
use titan_rush_core::http::HttpDocumentFetcher;
use titan_rush_core::{OccupancyResolver, PlannerConfig, TripOrchestrator, TripSession};
use tracing::info;

use crate::error::PlannerError;
use crate::records::{BuildingRecord, FacilityRecord, OccupancyRecord};

mod trip;

pub use trip::TripScreen;

/// Long-lived planner state shared by every screen
#[derive(uniffi::Object)]
pub struct PlannerState {
    config: PlannerConfig,
    campus: StaticCampusProvider,
    orchestrator: Arc<TripOrchestrator>,
    occupancy: OccupancyResolver<HttpDocumentFetcher>,
}

#[uniffi::export(async_runtime = "tokio")]
impl PlannerState {
    /// `config_json` may be empty to use the built-in endpoints
    #[uniffi::constructor]
    pub fn new(config_json: String) -> Result<Arc<Self>, PlannerError> {
        let config = PlannerConfig::from_json_str(&config_json)?;
        let client = config.http_client()?;

        let orchestrator = TripOrchestrator::from_config(&config, client.clone())?;
        let occupancy = OccupancyResolver::from_config(&config, client)?;

        info!(
            drive = %config.drive_estimate_url,
            walk = %config.walk_route_url,
            "planner state ready"
        );

        Ok(Arc::new(Self {
            config,
            campus: StaticCampusProvider::csuf(),
            orchestrator: Arc::new(orchestrator),
            occupancy,
        }))
    }

    pub fn facilities(&self) -> Vec<FacilityRecord> {
        self.campus
            .all_facilities()
            .iter()
            .map(|f| FacilityRecord::from(f.as_ref()))
            .collect()
    }

    pub fn buildings(&self) -> Vec<BuildingRecord> {
        self.campus
            .all_buildings()
            .iter()
            .map(|b| BuildingRecord::from(b.as_ref()))
            .collect()
    }

    /// Up to `count` facilities, nearest to the building first
    pub fn suggest_facilities(
        &self,
        building_id: String,
        count: u32,
    ) -> Result<Vec<FacilityRecord>, PlannerError> {
        let suggestions = self
            .campus
            .suggest_facilities_for(&BuildingIdentifier::new(building_id), count as usize)?;

        Ok(suggestions
            .iter()
            .map(|f| FacilityRecord::from(f.as_ref()))
            .collect())
    }

    /// One fetch of the occupancy document for every facility. Never fails;
    /// an unreachable document reports every count as unknown.
    pub async fn occupancy(&self) -> OccupancyRecord {
        let facilities = self.campus.all_facilities();
        let snapshot = self.occupancy.resolve(&facilities).await;
        OccupancyRecord::new(&snapshot, &facilities)
    }

    /// A fresh planning session for one trip screen
    pub fn trip_screen(&self) -> Arc<TripScreen> {
        Arc::new(TripScreen::new(
            TripSession::new(Arc::clone(&self.orchestrator)),
            self.config.viewport_padding_deg,
        ))
    }
}
