//! Live free-space counts per parking facility.
//!
//! The occupancy document is fetched once per resolve and every facility's
//! count is extracted from that single copy. A facility whose count cannot
//! be found is simply absent from the map; a failed fetch leaves the whole
//! map empty.

mod parser;

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use titan_rush_campus::{DocumentFetcher, Facility, FacilityIdentifier};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, PlannerConfig};
use crate::http::HttpDocumentFetcher;

pub use parser::{AnchorPatternParser, OccupancyParser};

pub type OccupancyMap = HashMap<FacilityIdentifier, u32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Live,
    /// The document could not be fetched; every facility is unknown
    Offline,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Spaces(u32),
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OccupancySnapshot {
    pub status: FetchStatus,
    pub counts: OccupancyMap,
}

impl OccupancySnapshot {
    pub fn offline() -> Self {
        Self {
            status: FetchStatus::Offline,
            counts: OccupancyMap::new(),
        }
    }

    pub fn availability(&self, facility: &FacilityIdentifier) -> Availability {
        self.counts
            .get(facility)
            .map_or(Availability::Unknown, |count| Availability::Spaces(*count))
    }
}

/// Extract a count for every facility from one document
pub fn extract_counts<P>(parser: &P, document: &str, facilities: &[Arc<Facility>]) -> OccupancyMap
where
    P: OccupancyParser + ?Sized,
{
    let mut counts = OccupancyMap::with_capacity(facilities.len());

    for facility in facilities {
        match parser.parse_count(document, &facility.occupancy_key) {
            Some(count) => {
                counts.insert(facility.id.clone(), count);
            }
            None => debug!(
                facility = %facility.id,
                anchor = %facility.occupancy_key,
                "no occupancy count found"
            ),
        }
    }

    counts
}

pub struct OccupancyResolver<F, P = AnchorPatternParser> {
    fetcher: F,
    parser: P,
}

impl OccupancyResolver<HttpDocumentFetcher> {
    pub fn from_config(config: &PlannerConfig, client: Client) -> Result<Self, ConfigError> {
        let fetcher = HttpDocumentFetcher::new(client, config.occupancy_url()?);
        Ok(Self::new(fetcher, AnchorPatternParser))
    }
}

impl<F, P> OccupancyResolver<F, P>
where
    F: DocumentFetcher,
    P: OccupancyParser,
{
    pub fn new(fetcher: F, parser: P) -> Self {
        Self { fetcher, parser }
    }

    pub async fn resolve(&self, facilities: &[Arc<Facility>]) -> OccupancySnapshot {
        let document = match self.fetcher.fetch_document().await {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, "occupancy document unavailable; all facilities unknown");
                return OccupancySnapshot::offline();
            }
        };

        let counts = extract_counts(&self.parser, &document, facilities);
        info!(
            found = counts.len(),
            facilities = facilities.len(),
            "resolved occupancy"
        );

        OccupancySnapshot {
            status: FetchStatus::Live,
            counts,
        }
    }
}
