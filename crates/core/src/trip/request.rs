use titan_rush_campus::{
    BuildingIdentifier, Coordinate, FacilityIdentifier, LocationProvider, MissingField,
    PedestrianLegParams, PlanError, Result, VehicleLegParams,
};

/// Everything needed to plan one trip.
///
/// Requests are values: each `with_*` call returns a new request, and the
/// orchestrator only ever sees a finished one.
#[derive(Clone, Debug, PartialEq)]
pub struct TripRequest {
    pub origin: Coordinate,
    pub facility: Option<FacilityIdentifier>,
    pub building: Option<BuildingIdentifier>,
    /// Raw `H:MM AM|PM` text as entered by the user
    pub desired_arrival: Option<String>,
}

impl TripRequest {
    pub fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            facility: None,
            building: None,
            desired_arrival: None,
        }
    }

    /// Start a request at the device's current position
    pub async fn locate(provider: &dyn LocationProvider) -> Result<Self> {
        let origin = provider.current_location().await?;
        Ok(Self::new(origin))
    }

    pub fn with_facility(self, facility: impl Into<FacilityIdentifier>) -> Self {
        Self {
            facility: Some(facility.into()),
            ..self
        }
    }

    pub fn with_building(self, building: impl Into<BuildingIdentifier>) -> Self {
        Self {
            building: Some(building.into()),
            ..self
        }
    }

    pub fn with_desired_arrival(self, arrival: impl Into<String>) -> Self {
        Self {
            desired_arrival: Some(arrival.into()),
            ..self
        }
    }

    /// Check for the first missing field, in facility, building, arrival order
    pub fn validate(&self) -> Result<ValidatedRequest<'_>> {
        let facility = self
            .facility
            .as_ref()
            .filter(|f| !f.is_blank())
            .ok_or(PlanError::MissingDestination(MissingField::Facility))?;

        let building = self
            .building
            .as_ref()
            .filter(|b| !b.is_blank())
            .ok_or(PlanError::MissingDestination(MissingField::Building))?;

        let arrival = self
            .desired_arrival
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or(PlanError::MissingDestination(MissingField::DesiredArrival))?;

        Ok(ValidatedRequest {
            vehicle: VehicleLegParams {
                origin: self.origin,
                facility: facility.clone(),
            },
            pedestrian: PedestrianLegParams {
                facility: facility.clone(),
                building: building.clone(),
            },
            arrival,
        })
    }
}

/// A request with every field present, split into per-leg inputs
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest<'a> {
    pub vehicle: VehicleLegParams,
    pub pedestrian: PedestrianLegParams,
    pub arrival: &'a str,
}
