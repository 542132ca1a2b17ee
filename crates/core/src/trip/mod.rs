//! Trip planning: one vehicle leg and one pedestrian leg, estimated
//! concurrently, then backsolved into a leave-by time.

mod orchestrator;
mod request;
mod session;

use titan_rush_campus::{ClockTime, Leg, LegKind, TravelDuration};

pub use orchestrator::{PedestrianEstimator, TripOrchestrator, VehicleEstimator};
pub use request::{TripRequest, ValidatedRequest};
pub use session::{PlanOutcome, TripSession};

#[derive(Clone, Debug, PartialEq)]
pub struct TripResult {
    pub vehicle_leg: Leg,
    pub pedestrian_leg: Leg,
    /// Component-wise sum of both legs; not carried into larger units
    pub total_duration: TravelDuration,
    /// `None` when the arrival text did not parse
    pub leave_by: Option<ClockTime>,
}

impl TripResult {
    /// Leave-by time for display; empty when it could not be computed
    pub fn leave_by_display(&self) -> String {
        self.leave_by.map(|t| t.to_string()).unwrap_or_default()
    }

    pub fn leg(&self, kind: LegKind) -> &Leg {
        match kind {
            LegKind::Vehicle => &self.vehicle_leg,
            LegKind::Pedestrian => &self.pedestrian_leg,
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::marker::PhantomData;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use titan_rush_campus::{
        BoxFuture, Collaborator, Coordinate, LegEstimator, PlanError, Result,
    };

    use super::*;

    pub(crate) fn leg(kind: LegKind, duration: TravelDuration) -> Leg {
        Leg {
            kind,
            coordinates: vec![
                Coordinate::new(33.8700, -117.9000).unwrap(),
                Coordinate::new(33.8792, -117.8885).unwrap(),
            ],
            duration,
            extra: None,
        }
    }

    /// Scripted estimator that counts its calls
    pub(crate) struct FakeEstimator<P> {
        outcome: Result<Leg>,
        delay: Option<Duration>,
        hang: bool,
        calls: AtomicUsize,
        _params: PhantomData<fn(&P)>,
    }

    impl<P> FakeEstimator<P> {
        pub(crate) fn ok(leg: Leg) -> Self {
            Self::with_outcome(Ok(leg))
        }

        pub(crate) fn failing(collaborator: Collaborator) -> Self {
            Self::with_outcome(Err(PlanError::network(collaborator, "HTTP 502 Bad Gateway")))
        }

        fn with_outcome(outcome: Result<Leg>) -> Self {
            Self {
                outcome,
                delay: None,
                hang: false,
                calls: AtomicUsize::new(0),
                _params: PhantomData,
            }
        }

        pub(crate) fn delayed(self, delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..self
            }
        }

        /// Never resolves
        pub(crate) fn hanging(self) -> Self {
            Self { hang: true, ..self }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl<P: Send + Sync> LegEstimator for FakeEstimator<P> {
        type Params = P;

        fn estimate_leg<'a>(&'a self, _params: &'a P) -> BoxFuture<'a, Result<Leg>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move {
                if self.hang {
                    std::future::pending::<()>().await;
                }
                if let Some(delay) = self.delay {
                    tokio::time::sleep(delay).await;
                }
                self.outcome.clone()
            })
        }
    }
}
