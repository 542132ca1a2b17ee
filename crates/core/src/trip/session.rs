//! Latest-request-wins planning.
//!
//! Every call to [`TripSession::plan`] takes a fresh generation token. A plan
//! whose token is no longer current is abandoned as soon as the generation
//! moves on, and a result that races in after that is dropped rather than
//! delivered.

use std::future::Future;
use std::sync::Arc;

use titan_rush_campus::Result;
use tokio::sync::watch;
use tracing::debug;

use super::{TripOrchestrator, TripRequest, TripResult};

#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    Completed(Result<TripResult>),
    /// A newer request started, or the session was invalidated
    Superseded,
}

impl PlanOutcome {
    pub fn into_result(self) -> Option<Result<TripResult>> {
        match self {
            PlanOutcome::Completed(result) => Some(result),
            PlanOutcome::Superseded => None,
        }
    }
}

pub struct TripSession {
    orchestrator: Arc<TripOrchestrator>,
    generation: watch::Sender<u64>,
}

impl TripSession {
    pub fn new(orchestrator: Arc<TripOrchestrator>) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            orchestrator,
            generation,
        }
    }

    pub async fn plan(&self, request: &TripRequest) -> PlanOutcome {
        let token = self.advance();
        self.supervise(token, self.orchestrator.plan_trip(request)).await
    }

    /// Plan a request that still has to be resolved, typically while the
    /// device location is looked up. The token is taken before `request` is
    /// polled, so this call supersedes older ones even if resolving fails.
    pub async fn plan_located<F>(&self, request: F) -> PlanOutcome
    where
        F: Future<Output = Result<TripRequest>>,
    {
        let token = self.advance();
        self.supervise(token, async {
            let request = request.await?;
            self.orchestrator.plan_trip(&request).await
        })
        .await
    }

    /// Abandon whatever plan is in flight. Used when the screen goes away.
    pub fn invalidate(&self) {
        let generation = self.advance();
        debug!(generation, "trip session invalidated");
    }

    async fn supervise<F>(&self, token: u64, work: F) -> PlanOutcome
    where
        F: Future<Output = Result<TripResult>>,
    {
        let mut current = self.generation.subscribe();

        tokio::select! {
            result = work => {
                if *self.generation.borrow() == token {
                    PlanOutcome::Completed(result)
                } else {
                    debug!(token, "dropping stale trip result");
                    PlanOutcome::Superseded
                }
            }
            _ = current.wait_for(|generation| *generation != token) => {
                debug!(token, "trip plan superseded");
                PlanOutcome::Superseded
            }
        }
    }

    fn advance(&self) -> u64 {
        let mut next = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            next = *generation;
        });
        next
    }
}
