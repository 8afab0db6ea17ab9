///! YouTube Data API client for channel search and batch lookup

use anyhow::{Context, Result};

use crate::config::ExportConfig;
use super::types::{ChannelListResponse, SearchListResponse};

/// Hard upstream limit on `maxResults` for a single search page.
pub const MAX_RESULTS_PER_PAGE: u32 = 50;

/// Hard upstream limit on ids per batch lookup. Search pages are capped at
/// the same size, so a single page can never overflow a lookup; the guard
/// in [`YoutubeClient::list_channels`] keeps that assumption explicit.
pub const MAX_BATCH_IDS: usize = 50;

pub struct YoutubeClient {
    client: reqwest::Client,
    config: ExportConfig,
}

impl YoutubeClient {
    pub fn new(config: ExportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("yt-channel-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    /// Search the most-viewed videos for a region.
    ///
    /// The search endpoint has no "popular channels" query; popular videos
    /// stand in for it, and the caller collects their channel ids.
    pub async fn search_popular_videos(
        &self,
        region_code: &str,
        max_results: u32,
    ) -> Result<SearchListResponse> {
        let response = self
            .client
            .get(&self.config.search_url)
            .query(&[
                ("part", "snippet"),
                ("regionCode", region_code),
                ("maxResults", &max_results.to_string()),
                ("type", "video"),
                ("order", "viewCount"),
                ("key", &self.config.api_key),
            ])
            .send()
            .await
            .context(format!("Failed to send video search for {}", region_code))?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error {} from video search for {}",
                response.status(),
                region_code
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse video search response")
    }

    /// Search for channel entities, US region, English language hint.
    /// Pass the previous page's continuation token to fetch the next page.
    pub async fn search_channels(
        &self,
        max_results: u32,
        page_token: Option<&str>,
    ) -> Result<SearchListResponse> {
        let max_results = max_results.min(MAX_RESULTS_PER_PAGE);

        let mut request = self.client.get(&self.config.search_url).query(&[
            ("part", "snippet"),
            ("maxResults", &max_results.to_string()),
            ("type", "channel"),
            ("relevanceLanguage", "en"),
            ("regionCode", "US"),
            ("key", &self.config.api_key),
        ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request
            .send()
            .await
            .context("Failed to send channel search")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error {} from channel search",
                response.status()
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse channel search response")
    }

    /// Resolve up to [`MAX_BATCH_IDS`] channel ids in one round trip.
    pub async fn list_channels(&self, ids: &[String]) -> Result<ChannelListResponse> {
        anyhow::ensure!(
            ids.len() <= MAX_BATCH_IDS,
            "Batch lookup limited to {} ids, got {}",
            MAX_BATCH_IDS,
            ids.len()
        );

        tracing::debug!("Looking up {} channel ids", ids.len());

        let response = self
            .client
            .get(&self.config.channels_url)
            .query(&[
                ("part", "snippet,statistics"),
                ("id", &ids.join(",")),
                ("key", &self.config.api_key),
            ])
            .send()
            .await
            .context("Failed to send channel lookup")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "HTTP error {} from channel lookup",
                response.status()
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse channel lookup response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_channels_rejects_oversized_batch() {
        let client = YoutubeClient::new(ExportConfig::default()).unwrap();
        let ids: Vec<String> = (0..51).map(|i| format!("UC{:03}", i)).collect();

        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(client.list_channels(&ids));
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore] // Requires network connection and YT_API_KEY
    async fn test_search_popular_videos_live() {
        let config = ExportConfig::load().unwrap();
        let client = YoutubeClient::new(config).unwrap();
        let result = client.search_popular_videos("US", 5).await;
        assert!(result.is_ok() || result.is_err()); // Just test it can run
    }
}
