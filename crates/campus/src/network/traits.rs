//! Pluggable collaborator traits.
//!
//! External crates implement these to provide the remote estimates, the
//! occupancy document and the device location.

use std::future::Future;
use std::pin::Pin;

use crate::models::types::{Coordinate, Leg, Result};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetch the shared occupancy document as text
pub trait DocumentFetcher: Send + Sync {
    fn fetch_document(&self) -> BoxFuture<'_, Result<String>>;
}

/// Estimate one leg of a trip with a single remote call.
///
/// Implementations hold no state between calls. An empty coordinate
/// sequence is a valid leg; a failed call is an error.
pub trait LegEstimator: Send + Sync {
    type Params: Send + Sync;

    fn estimate_leg<'a>(&'a self, params: &'a Self::Params) -> BoxFuture<'a, Result<Leg>>;
}

/// The device's current position, or a permission/availability failure
pub trait LocationProvider: Send + Sync {
    fn current_location(&self) -> BoxFuture<'_, Result<Coordinate>>;
}
