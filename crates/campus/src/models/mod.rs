//! Trip planning data models, types, and traits.

pub mod clock;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use clock::{
    backsolve_leave_time, backsolve_leave_time_str, ClockTime, Meridiem, ParseClockTimeError,
    TravelDuration,
};
pub use traits::CampusProvider;
pub use types::{
    Building, Collaborator, Coordinate, ErrorKind, Facility, Leg, LegKind, MissingField,
    PedestrianLegParams, PlanError, Result, VehicleLegParams,
};
