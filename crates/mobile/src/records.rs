//! FFI-friendly mirrors of the domain types.

use std::sync::Arc;

use titan_rush_core::campus::{
    BoxFuture, Building, Coordinate, Facility, Leg, LegKind, LocationProvider, PlanError, Result,
    TravelDuration,
};
use titan_rush_core::{Availability, BoundingRegion, FetchStatus, OccupancySnapshot, TripRequest};

use crate::error::PlannerError;

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct CoordinateRecord {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for CoordinateRecord {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        }
    }
}

impl TryFrom<CoordinateRecord> for Coordinate {
    type Error = PlannerError;

    fn try_from(record: CoordinateRecord) -> std::result::Result<Self, Self::Error> {
        Coordinate::new(record.latitude, record.longitude).ok_or_else(|| {
            PlannerError::Validation(format!(
                "invalid coordinate {},{}",
                record.latitude, record.longitude
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FacilityRecord {
    pub id: String,
    pub display_name: String,
    pub location: CoordinateRecord,
}

impl From<&Facility> for FacilityRecord {
    fn from(facility: &Facility) -> Self {
        Self {
            id: facility.id.to_string(),
            display_name: facility.display_name.clone(),
            location: facility.location.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct BuildingRecord {
    pub id: String,
    pub display_name: String,
    pub location: CoordinateRecord,
}

impl From<&Building> for BuildingRecord {
    fn from(building: &Building) -> Self {
        Self {
            id: building.id.to_string(),
            display_name: building.display_name.clone(),
            location: building.location.into(),
        }
    }
}

// ============================================================================
// Occupancy
// ============================================================================

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct FacilityOccupancyRecord {
    pub facility_id: String,
    /// `None` when the count is unknown
    pub free_spaces: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct OccupancyRecord {
    /// False when the occupancy document could not be fetched
    pub live: bool,
    pub facilities: Vec<FacilityOccupancyRecord>,
}

impl OccupancyRecord {
    pub(crate) fn new(snapshot: &OccupancySnapshot, facilities: &[Arc<Facility>]) -> Self {
        Self {
            live: snapshot.status == FetchStatus::Live,
            facilities: facilities
                .iter()
                .map(|f| FacilityOccupancyRecord {
                    facility_id: f.id.to_string(),
                    free_spaces: match snapshot.availability(&f.id) {
                        Availability::Spaces(n) => Some(n),
                        Availability::Unknown => None,
                    },
                })
                .collect(),
        }
    }
}

// ============================================================================
// Trips
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct DurationRecord {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl From<TravelDuration> for DurationRecord {
    fn from(duration: TravelDuration) -> Self {
        Self {
            hours: duration.hours,
            minutes: duration.minutes,
            seconds: duration.seconds,
        }
    }
}

impl From<DurationRecord> for TravelDuration {
    fn from(record: DurationRecord) -> Self {
        TravelDuration::new(record.hours, record.minutes, record.seconds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum LegKindRecord {
    Vehicle,
    Pedestrian,
}

impl From<LegKind> for LegKindRecord {
    fn from(kind: LegKind) -> Self {
        match kind {
            LegKind::Vehicle => LegKindRecord::Vehicle,
            LegKind::Pedestrian => LegKindRecord::Pedestrian,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct LegRecord {
    pub kind: LegKindRecord,
    /// Empty means "no route"
    pub coordinates: Vec<CoordinateRecord>,
    pub duration: DurationRecord,
    pub length_meters: f64,
    /// Minutes to find a spot, vehicle legs only
    pub parking_minutes: Option<f64>,
}

impl From<&Leg> for LegRecord {
    fn from(leg: &Leg) -> Self {
        Self {
            kind: leg.kind.into(),
            coordinates: leg.coordinates.iter().copied().map(Into::into).collect(),
            duration: leg.duration.into(),
            length_meters: leg.length_meters(),
            parking_minutes: leg.extra,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, uniffi::Record)]
pub struct RegionRecord {
    pub center: CoordinateRecord,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl From<BoundingRegion> for RegionRecord {
    fn from(region: BoundingRegion) -> Self {
        Self {
            center: region.center.into(),
            latitude_delta: region.latitude_delta,
            longitude_delta: region.longitude_delta,
        }
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TripResultRecord {
    pub vehicle_leg: LegRecord,
    pub pedestrian_leg: LegRecord,
    pub total_duration: DurationRecord,
    /// Empty when the arrival time could not be parsed
    pub leave_by: String,
    /// Region covering both legs, if either has a route
    pub region: Option<RegionRecord>,
}

/// Where the trip starts, as reported by the host's location service
#[derive(Clone, Debug, PartialEq, uniffi::Enum)]
pub enum LocationFix {
    Position { latitude: f64, longitude: f64 },
    PermissionDenied { reason: String },
    Unavailable { reason: String },
}

impl LocationProvider for LocationFix {
    fn current_location(&self) -> BoxFuture<'_, Result<Coordinate>> {
        let fix = match self {
            LocationFix::Position {
                latitude,
                longitude,
            } => Coordinate::new(*latitude, *longitude).ok_or_else(|| {
                PlanError::LocationUnavailable("position is not a finite coordinate".into())
            }),
            LocationFix::PermissionDenied { reason } => {
                Err(PlanError::PermissionDenied(reason.clone()))
            }
            LocationFix::Unavailable { reason } => Err(PlanError::LocationUnavailable(reason.clone())),
        };
        Box::pin(async move { fix })
    }
}

#[derive(Clone, Debug, PartialEq, uniffi::Record)]
pub struct TripRequestRecord {
    pub location: LocationFix,
    pub facility_id: Option<String>,
    pub building_id: Option<String>,
    /// `H:MM AM|PM`
    pub desired_arrival: Option<String>,
}

impl TripRequestRecord {
    pub(crate) async fn into_request(self) -> Result<TripRequest> {
        let mut request = TripRequest::locate(&self.location).await?;

        if let Some(facility) = self.facility_id {
            request = request.with_facility(facility);
        }
        if let Some(building) = self.building_id {
            request = request.with_building(building);
        }
        if let Some(arrival) = self.desired_arrival {
            request = request.with_desired_arrival(arrival);
        }

        Ok(request)
    }
}
