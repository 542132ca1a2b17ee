//! Network and device abstractions.

pub mod traits;

pub use traits::{BoxFuture, DocumentFetcher, LegEstimator, LocationProvider};
