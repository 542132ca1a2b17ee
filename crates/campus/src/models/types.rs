//! Core data types and enums for trip planning.

use std::fmt;

use geo::Point;

use crate::identifiers::*;
use crate::models::clock::TravelDuration;
use crate::spatial::queries::path_length_meters;

// ============================================================================
// Coordinates
// ============================================================================

/// A WGS84 position with both components finite.
///
/// The only way to build one is [`Coordinate::new`], so a coordinate
/// sequence can never hold a NaN or infinite component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl From<Coordinate> for Point {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

// ============================================================================
// Reference data
// ============================================================================

/// A parking structure or lot.
#[derive(Clone, Debug, PartialEq)]
pub struct Facility {
    pub id: FacilityIdentifier,
    pub display_name: String,
    /// Text that precedes this facility's count in the occupancy document
    pub occupancy_key: String,
    pub location: Coordinate,
}

/// A destination building on campus.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub id: BuildingIdentifier,
    pub display_name: String,
    pub location: Coordinate,
}

// ============================================================================
// Legs
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegKind {
    Vehicle,
    Pedestrian,
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegKind::Vehicle => f.write_str("vehicle"),
            LegKind::Pedestrian => f.write_str("pedestrian"),
        }
    }
}

/// One contiguous segment of a trip.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub kind: LegKind,
    pub coordinates: Vec<Coordinate>,
    pub duration: TravelDuration,
    /// Minutes to find a spot once at the facility (vehicle legs only).
    /// Shown next to the leg; not part of the leave-by sum.
    pub extra: Option<f64>,
}

impl Leg {
    /// An empty coordinate sequence is rendered as "no route"
    pub fn is_routable(&self) -> bool {
        !self.coordinates.is_empty()
    }

    /// Haversine length of the coordinate sequence in meters
    pub fn length_meters(&self) -> f64 {
        path_length_meters(&self.coordinates)
    }
}

/// Input for the vehicle leg: from the user's position to a facility
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleLegParams {
    pub origin: Coordinate,
    pub facility: FacilityIdentifier,
}

/// Input for the pedestrian leg: from a facility to a building
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedestrianLegParams {
    pub facility: FacilityIdentifier,
    pub building: BuildingIdentifier,
}

// ============================================================================
// Errors
// ============================================================================

/// Which part of a trip request is absent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Facility,
    Building,
    DesiredArrival,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField::Facility => f.write_str("parking facility"),
            MissingField::Building => f.write_str("building"),
            MissingField::DesiredArrival => f.write_str("arrival time"),
        }
    }
}

/// The remote services this crate talks to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collaborator {
    DrivingEstimate,
    WalkingRoute,
    OccupancyDocument,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::DrivingEstimate => f.write_str("Driving estimate"),
            Collaborator::WalkingRoute => f.write_str("Walking route"),
            Collaborator::OccupancyDocument => f.write_str("Occupancy document"),
        }
    }
}

/// How the display layer should surface an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Incomplete request; shown as a message, never retried automatically
    Validation,
    /// Remote call failed; the user may retry the whole operation
    Network,
    /// Location denied or unavailable; offer device settings and a manual retry
    Permission,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("Missing destination information: no {0} selected")]
    MissingDestination(MissingField),

    #[error("Facility not found: {0}")]
    FacilityNotFound(FacilityIdentifier),

    #[error("Building not found: {0}")]
    BuildingNotFound(BuildingIdentifier),

    #[error("{collaborator} request failed: {message}")]
    Network {
        collaborator: Collaborator,
        message: String,
    },

    #[error("Location permission denied: {0}")]
    PermissionDenied(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

impl PlanError {
    pub fn network(collaborator: Collaborator, message: impl Into<String>) -> Self {
        Self::Network {
            collaborator,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::MissingDestination(_)
            | PlanError::FacilityNotFound(_)
            | PlanError::BuildingNotFound(_) => ErrorKind::Validation,
            PlanError::Network { .. } => ErrorKind::Network,
            PlanError::PermissionDenied(_) | PlanError::LocationUnavailable(_) => {
                ErrorKind::Permission
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
