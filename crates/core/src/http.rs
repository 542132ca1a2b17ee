//! HTTP plumbing shared by the remote collaborators.

use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use titan_rush_campus::{BoxFuture, Collaborator, DocumentFetcher, PlanError, Result};
use tracing::debug;

pub(crate) fn network_error(collaborator: Collaborator, error: reqwest::Error) -> PlanError {
    let message = match error.status() {
        Some(status) => format!("HTTP {status}"),
        None => error.without_url().to_string(),
    };
    PlanError::network(collaborator, message)
}

/// POST `body` as JSON and decode a JSON response.
///
/// Transport failures, non-success statuses and undecodable bodies all
/// surface as [`PlanError::Network`].
pub(crate) async fn post_json<B, T>(
    client: &Client,
    url: &Url,
    collaborator: Collaborator,
    body: &B,
) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    debug!(%url, %collaborator, "POST");

    let response = client
        .post(url.clone())
        .json(body)
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(|e| network_error(collaborator, e))?;

    response
        .json::<T>()
        .await
        .map_err(|e| network_error(collaborator, e))
}

/// Fetches the occupancy document over HTTP GET
#[derive(Clone, Debug)]
pub struct HttpDocumentFetcher {
    client: Client,
    url: Url,
}

impl HttpDocumentFetcher {
    pub fn new(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

impl DocumentFetcher for HttpDocumentFetcher {
    fn fetch_document(&self) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let collaborator = Collaborator::OccupancyDocument;
            debug!(url = %self.url, "GET occupancy document");

            let response = self
                .client
                .get(self.url.clone())
                .send()
                .await
                .and_then(Response::error_for_status)
                .map_err(|e| network_error(collaborator, e))?;

            response
                .text()
                .await
                .map_err(|e| network_error(collaborator, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client, serve};
    use axum::{Router, http::StatusCode, routing::get};

    #[tokio::test]
    async fn test_fetch_document() {
        let base = serve(Router::new().route(
            "/counts",
            get(|| async { "<td>Nutwood Structure</td><td>412</td>" }),
        ))
        .await;

        let fetcher = HttpDocumentFetcher::new(client(), base.join("counts").unwrap());
        let body = fetcher.fetch_document().await.unwrap();
        assert!(body.contains("412"));
    }

    #[tokio::test]
    async fn test_fetch_document_error_status() {
        let base = serve(Router::new().route(
            "/counts",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        ))
        .await;

        let fetcher = HttpDocumentFetcher::new(client(), base.join("counts").unwrap());
        let err = fetcher.fetch_document().await.unwrap_err();
        assert_eq!(
            err,
            PlanError::network(Collaborator::OccupancyDocument, "HTTP 503 Service Unavailable")
        );
    }
}
