//! Request and response bodies exchanged with the estimate services.
//!
//! Responses are decoded leniently: numbers may arrive as JSON numbers or as
//! numeric strings, and optional sections may be absent.

mod drive;
mod number;
mod walk;

pub use drive::{DriveEstimateRequest, DriveEstimateResponse, DriveRoute, RouteCandidate, RouteLeg};
pub use number::{LooseNumber, WirePoint};
pub use walk::{WalkRouteRequest, WalkRouteResponse};
