//! HTTP access to the sports data API.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::{FetchError, FetchResult};
use crate::espn::{Athlete, DepthChart};

/// Root of the public NFL endpoints.
pub const DEFAULT_BASE_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

/// The two lookups the collector needs. Implemented over HTTP by
/// [`EspnClient`] and by in-memory fakes in tests.
pub trait SportsApi {
    /// Depth chart of one team for one season.
    fn depth_chart(
        &self,
        season: i32,
        team_id: u32,
    ) -> impl Future<Output = FetchResult<DepthChart>> + Send;

    /// Athlete record behind a `$ref` link.
    fn athlete(&self, href: &str) -> impl Future<Output = FetchResult<Athlete>> + Send;
}

/// [`SportsApi`] over HTTPS with reqwest.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: reqwest::Client,
    base_url: String,
}

impl EspnClient {
    /// Client rooted at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> FetchResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("gq-fetch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of a team's depth chart.
    pub fn depth_chart_url(&self, season: i32, team_id: u32) -> String {
        format!(
            "{}/seasons/{season}/teams/{team_id}/depthcharts",
            self.base_url
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

impl SportsApi for EspnClient {
    async fn depth_chart(&self, season: i32, team_id: u32) -> FetchResult<DepthChart> {
        let url = self.depth_chart_url(season, team_id);
        self.get_json(&url).await
    }

    async fn athlete(&self, href: &str) -> FetchResult<Athlete> {
        self.get_json(href).await
    }
}
