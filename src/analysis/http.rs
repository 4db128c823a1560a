//! HTTP transport for the analysis API.
//!
//! Every call is a single round trip: no retries, no timeout, no
//! cancellation. Non-2xx answers become [`DashboardError::Status`].

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Response, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::types::{
    AnalysisReport, ApiErrorBody, ComparePlayersRequest, CompareTeamsRequest, ComparisonResult,
    EntityKind, PlayersEnvelope, TeamsEnvelope,
};
use crate::{error::DashboardError, Result};


/// Path prefix every endpoint lives under.
pub const API_PREFIX: [&str; 2] = ["api", "analysis"];

const USER_AGENT: &str = concat!("injury-dash/", env!("CARGO_PKG_VERSION"));

/// Operations the dashboard needs from the backend.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// `GET /teams` or `GET /players`.
    async fn names(&self, kind: EntityKind) -> Result<Vec<String>>;

    /// `GET /overview`.
    async fn overview(&self) -> Result<AnalysisReport>;

    /// `GET /team/{name}` or `GET /player/{name}`.
    async fn report(&self, kind: EntityKind, name: &str) -> Result<AnalysisReport>;

    /// `POST /compare/teams` or `POST /compare/players`.
    async fn compare(&self, kind: EntityKind, first: &str, second: &str)
        -> Result<ComparisonResult>;
}

/// [`AnalysisApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpAnalysisApi {
    client: Client,
    base: Url,
}

impl HttpAnalysisApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(common_headers())
            .build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim()).map_err(|e| DashboardError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(DashboardError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            });
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Build `{base}/api/analysis/{segments...}`. Each segment is
    /// percent-encoded on its own, so names containing `/` stay one segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| DashboardError::InvalidBaseUrl {
                    url: self.base.to_string(),
                    reason: "URL cannot carry a path".to_string(),
                })?;
            path.pop_if_empty();
            path.extend(API_PREFIX);
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        decode(response).await
    }
}

#[async_trait]
impl AnalysisApi for HttpAnalysisApi {
    async fn names(&self, kind: EntityKind) -> Result<Vec<String>> {
        let url = self.endpoint(&[kind.plural_segment()])?;
        match kind {
            EntityKind::Team => Ok(self.get_json::<TeamsEnvelope>(url).await?.teams),
            EntityKind::Player => Ok(self.get_json::<PlayersEnvelope>(url).await?.players),
        }
    }

    async fn overview(&self) -> Result<AnalysisReport> {
        let url = self.endpoint(&["overview"])?;
        self.get_json(url).await
    }

    async fn report(&self, kind: EntityKind, name: &str) -> Result<AnalysisReport> {
        let url = self.endpoint(&[kind.report_segment(), name])?;
        self.get_json(url).await
    }

    async fn compare(
        &self,
        kind: EntityKind,
        first: &str,
        second: &str,
    ) -> Result<ComparisonResult> {
        let url = self.endpoint(&["compare", kind.plural_segment()])?;
        match kind {
            EntityKind::Team => {
                let body = CompareTeamsRequest {
                    team1: first,
                    team2: second,
                };
                self.post_json(url, &body).await
            }
            EntityKind::Player => {
                let body = ComparePlayersRequest {
                    player1: first,
                    player2: second,
                };
                self.post_json(url, &body).await
            }
        }
    }
}

/// Headers sent with every request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Turn a response into `T`, or into a status error carrying the
/// backend's `{"error": ...}` text if it sent one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .map(|b| b.error);
        return Err(DashboardError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
