pub mod config;
pub mod estimate;
pub mod http;
pub mod occupancy;
pub mod trip;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the domain crate
pub use titan_rush_campus as campus;

pub use config::{ConfigError, PlannerConfig};
pub use occupancy::{Availability, FetchStatus, OccupancyResolver, OccupancySnapshot};
pub use trip::{PlanOutcome, TripOrchestrator, TripRequest, TripResult, TripSession};
pub use viewport::{BoundingRegion, fit_region, fit_region_with_padding};
