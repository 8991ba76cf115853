//! Async HTTP client for the TripTactix planner backend, plus URL builders
//! for the two browser navigation targets (export page, map search).

use reqwest::Client;
use shared::protocol::{GenerateTripRequest, GenerateTripResponse};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request to {path} failed: {source}")]
    Transport {
        path: &'static str,
        source: reqwest::Error,
    },
    #[error("backend returned {status} for {path}")]
    UnexpectedStatus {
        path: &'static str,
        status: reqwest::StatusCode,
    },
    #[error("failed to decode {path} response: {source}")]
    Decode {
        path: &'static str,
        source: reqwest::Error,
    },
}

#[derive(Debug)]
pub struct PlannerClient {
    http: Client,
    base_url: String,
}

impl PlannerClient {
    /// Builds a client for the given backend base URL. The URL is validated
    /// up front so later request paths can be appended infallibly.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ClientError::InvalidServerUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /generate_trip` with the six form fields as a JSON body.
    ///
    /// Returns `Some(summary)` when the backend produced one, `None` when the
    /// `summary` key is absent or empty. Non-2xx statuses and undecodable
    /// bodies are errors; the caller collapses them into one user-visible
    /// failure message.
    pub async fn generate_trip(
        &self,
        request: &GenerateTripRequest,
    ) -> Result<Option<String>, ClientError> {
        const PATH: &str = "/generate_trip";
        debug!(
            destination = %request.destination,
            days = %request.days,
            interests = request.interests.len(),
            "submitting trip generation request"
        );

        let response = self
            .http
            .post(format!("{}{PATH}", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport { path: PATH, source })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "trip generation rejected by backend");
            return Err(ClientError::UnexpectedStatus { path: PATH, status });
        }

        let body: GenerateTripResponse = response
            .json()
            .await
            .map_err(|source| ClientError::Decode { path: PATH, source })?;
        Ok(body.summary.filter(|summary| !summary.is_empty()))
    }

    pub fn export_page_url(&self) -> String {
        export_page_url(&self.base_url)
    }
}

/// Export page on the backend, opened as a full-page navigation in the system
/// browser. No parameters; the export endpoint derives everything from
/// server-side session context.
pub fn export_page_url(base_url: &str) -> String {
    format!("{}/export_page", base_url.trim_end_matches('/'))
}

/// Google Maps search for attractions near a destination. The query value is
/// form-urlencoded (spaces become `+`, other reserved characters are
/// escaped), not percent-encoded per RFC 3986; Maps accepts both.
pub fn maps_search_url(destination: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("query", &format!("attractions in {destination}"))
        .finish();
    format!("https://www.google.com/maps/search/?api=1&{query}")
}

#[cfg(test)]
mod tests;
