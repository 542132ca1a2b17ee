//! Planner configuration.
//!
//! Everything is optional in the JSON form; absent keys fall back to the
//! local development endpoints.

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DRIVE_ESTIMATE_URL: &str = "http://127.0.0.1:8000/estimate";
pub const DEFAULT_WALK_ROUTE_URL: &str = "http://127.0.0.1:8001/walk-route";
pub const DEFAULT_OCCUPANCY_URL: &str = "https://parking.fullerton.edu/parkinglotcounts/mobile.aspx";
pub const DEFAULT_PADDING_DEG: f64 = 0.002;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid planner config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {field} {value:?}: {source}")]
    Url {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[error("viewport padding must be a finite, positive number of degrees (got {0})")]
    Padding(f64),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub drive_estimate_url: String,
    pub walk_route_url: String,
    pub occupancy_url: String,
    pub viewport_padding_deg: f64,
    /// Honor `HTTP_PROXY` and friends from the environment
    pub system_proxy: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            drive_estimate_url: DEFAULT_DRIVE_ESTIMATE_URL.to_owned(),
            walk_route_url: DEFAULT_WALK_ROUTE_URL.to_owned(),
            occupancy_url: DEFAULT_OCCUPANCY_URL.to_owned(),
            viewport_padding_deg: DEFAULT_PADDING_DEG,
            system_proxy: true,
        }
    }
}

impl PlannerConfig {
    /// Parse and validate a JSON config. An empty string yields the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.drive_estimate_url()?;
        self.walk_route_url()?;
        self.occupancy_url()?;

        if !self.viewport_padding_deg.is_finite() || self.viewport_padding_deg <= 0.0 {
            return Err(ConfigError::Padding(self.viewport_padding_deg));
        }

        Ok(())
    }

    pub fn drive_estimate_url(&self) -> Result<Url, ConfigError> {
        parse_url("drive_estimate_url", &self.drive_estimate_url)
    }

    pub fn walk_route_url(&self) -> Result<Url, ConfigError> {
        parse_url("walk_route_url", &self.walk_route_url)
    }

    pub fn occupancy_url(&self) -> Result<Url, ConfigError> {
        parse_url("occupancy_url", &self.occupancy_url)
    }

    /// One client shared by every collaborator so connections are pooled
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        let mut builder =
            Client::builder().user_agent(concat!("titan-rush/", env!("CARGO_PKG_VERSION")));
        if !self.system_proxy {
            builder = builder.no_proxy();
        }
        Ok(builder.build()?)
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::Url {
        field,
        value: value.to_owned(),
        source,
    })
}
