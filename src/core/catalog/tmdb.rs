use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::models::{DiscoverResponse, Genre, GenreListResponse, Movie};
use crate::utils::{CinedashResult, Error};

use super::CatalogSource;

#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    sort_by: String,
    client: reqwest::Client,
}

/// Error envelope TMDB sends alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct TmdbStatus {
    status_message: String,
}

impl TmdbClient {
    pub fn new(base_url: String, api_key: String, sort_by: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            sort_by,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(cfg: &TmdbConfig) -> Self {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone(), cfg.sort_by.clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> CinedashResult<T> {
        let url = self.api_url(path);
        debug!(target: "cinedash::tmdb", url = %url, "GET");

        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<TmdbStatus>(&body)
                .map(|s| s.status_message)
                .unwrap_or(body);
            return Err(Error::Api { status, message });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn discover_movies(&self) -> CinedashResult<Vec<Movie>> {
        let resp: DiscoverResponse = self
            .get_json("discover/movie", &[("sort_by", self.sort_by.as_str())])
            .await?;
        Ok(resp.results)
    }

    async fn list_genres(&self) -> CinedashResult<Vec<Genre>> {
        let resp: GenreListResponse = self.get_json("genre/movie/list", &[]).await?;
        Ok(resp.genres)
    }
}
