//! # titan-rush-campus
//!
//! Campus reference data and the trip-planning domain model.
//!
//! ## Features
//!
//! - **Typed identifiers**: cheap-clone facility and building ids
//! - **Clock math**: 12-hour wall-clock parsing and leave-by backsolving
//! - **Spatial queries**: R-tree backed facility lookup around a point
//! - **Pluggable collaborators**: traits for remote estimates, the occupancy
//!   document and the device location
//!
//! ## Example
//!
//! ```
//! use titan_rush_campus::prelude::*;
//!
//! let arrival: ClockTime = "9:00 AM".parse().unwrap();
//! let total = TravelDuration::new(1, 30, 0);
//! let leave = backsolve_leave_time(&arrival, &total).unwrap();
//! assert_eq!(leave.to_string(), "7:30 AM");
//!
//! let campus = StaticCampusProvider::csuf();
//! let library = campus.building(&BuildingIdentifier::new("pollak-library")).unwrap();
//! let nearby = campus.facilities_near(library.location.into(), 400.0);
//! assert!(!nearby.is_empty());
//! ```

pub mod identifiers;
pub mod models;
pub mod network;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{clock::*, traits::*, types::*};
    pub use crate::network::traits::*;
    pub use crate::provider::StaticCampusProvider;
}

pub use prelude::*;
