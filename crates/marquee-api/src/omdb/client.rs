use std::time::Duration;

use reqwest::Client;

use marquee_core::config::ApiConfig;
use marquee_core::models::{MovieDetails, MovieId, SearchResultEntry};

use super::error::OmdbError;
use super::types::{is_success, OmdbSearchResponse, OmdbTitleResponse};
use crate::traits::MovieDatabase;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// OMDb HTTP client.
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Build a client from the `[api]` config section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, OmdbError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        let base_url = if config.base_url.trim().is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            config.base_url.clone()
        };
        if config.api_key.trim().is_empty() {
            tracing::warn!("no OMDb API key configured, requests will be rejected");
        }
        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }

    async fn get_text(&self, params: &[(&str, &str)]) -> Result<String, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        Ok(resp.text().await?)
    }

    /// Download a poster image. Poster URLs point at a CDN, not the API,
    /// so no key is sent.
    pub async fn fetch_poster(&self, url: &str) -> Result<Vec<u8>, OmdbError> {
        let resp = self.http.get(url).send().await?;
        let resp = Self::check_response(resp).await?;
        let bytes = resp.bytes().await?;
        tracing::debug!(url, size = bytes.len(), "poster downloaded");
        Ok(bytes.to_vec())
    }
}

impl MovieDatabase for OmdbClient {
    type Error = OmdbError;

    async fn search(&self, query: &str) -> Result<Vec<SearchResultEntry>, OmdbError> {
        let body = self.get_text(&[("s", query)]).await?;
        let search: OmdbSearchResponse =
            serde_json::from_str(&body).map_err(|e| OmdbError::Parse(e.to_string()))?;

        if !is_success(&search.response) {
            tracing::debug!(
                query,
                reason = search.error.as_deref().unwrap_or_default(),
                "search returned no results"
            );
            return Ok(Vec::new());
        }

        let results = search.into_results();
        tracing::debug!(query, count = results.len(), "search complete");
        Ok(results)
    }

    async fn details(&self, id: &MovieId) -> Result<MovieDetails, OmdbError> {
        let body = self.get_text(&[("i", id.as_str())]).await?;
        let title: OmdbTitleResponse =
            serde_json::from_str(&body).map_err(|e| OmdbError::Parse(e.to_string()))?;

        if !is_success(&title.response) {
            let reason = title.error.unwrap_or_else(|| id.to_string());
            tracing::debug!(id = %id, %reason, "title lookup failed");
            return Err(OmdbError::NotFound(reason));
        }

        Ok(title.into_details(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_empty_base_url() {
        let config = ApiConfig {
            base_url: String::new(),
            api_key: "abc123".into(),
            timeout_secs: 5,
        };
        let client = OmdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_config_keeps_custom_base_url() {
        let config = ApiConfig {
            base_url: "http://localhost:9000/".into(),
            api_key: String::new(),
            timeout_secs: 0,
        };
        let client = OmdbClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/");
    }
}
