use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::app_config::YouTubeSourceConfig;
use crate::hotspot::HotspotItem;

use super::{parse_date, Collector};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Video collector using the YouTube Data API v3
pub struct YouTubeCollector {
    config: YouTubeSourceConfig,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    // The API reports counters as strings; passed through as-is
    #[serde(default)]
    statistics: Map<String, Value>,
}

impl YouTubeCollector {
    /// Create a collector; the API key has already been resolved from the
    /// configured environment variable
    pub fn new(config: YouTubeSourceConfig, api_key: String) -> Self {
        Self {
            config,
            api_key,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Search recent videos for one query, ranked by view count
    async fn search(&self, query: &str) -> Result<Vec<HotspotItem>> {
        // Only videos published in the last 24 hours
        let published_after = (Utc::now() - chrono::Duration::days(1))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
        let max_results = self.config.max_results.to_string();

        let response: SearchResponse = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("order", "viewCount"),
                ("publishedAfter", &published_after),
                ("maxResults", &max_results),
                ("key", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let video_ids: Vec<String> = response
            .items
            .iter()
            .map(|item| item.id.video_id.clone())
            .filter(|id| !id.is_empty())
            .collect();
        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        let stats = self.video_stats(&video_ids).await.unwrap_or_else(|e| {
            warn!("Failed to fetch YouTube statistics: {}", e);
            HashMap::new()
        });

        let items = response
            .items
            .into_iter()
            .filter(|item| !item.id.video_id.is_empty())
            .map(|item| {
                let video_id = item.id.video_id;
                let video_stats = stats.get(&video_id);
                let views = video_stats
                    .and_then(|s| s.get("viewCount").cloned())
                    .unwrap_or(Value::from(0));
                let likes = video_stats
                    .and_then(|s| s.get("likeCount").cloned())
                    .unwrap_or(Value::from(0));

                HotspotItem::new(
                    item.snippet.title,
                    format!("https://www.youtube.com/watch?v={}", video_id),
                    "YouTube",
                    "YouTube",
                )
                .with_published_at(parse_date(&item.snippet.published_at))
                .with_extra("channel", Value::String(item.snippet.channel_title))
                .with_extra("views", views)
                .with_extra("likes", likes)
            })
            .collect();

        Ok(items)
    }

    /// Look up statistics for a set of video ids
    async fn video_stats(&self, video_ids: &[String]) -> Result<HashMap<String, Map<String, Value>>> {
        let response: VideosResponse = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "statistics"),
                ("id", &video_ids.join(",")),
                ("key", &self.api_key),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| (item.id, item.statistics))
            .collect())
    }
}

#[async_trait]
impl Collector for YouTubeCollector {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn collect(&self) -> Result<Vec<HotspotItem>> {
        if self.api_key.is_empty() {
            warn!("YouTube API key not configured ({})", self.config.api_key_env);
            return Ok(Vec::new());
        }

        let mut items = Vec::new();

        for query in &self.config.queries {
            match self.search(query).await {
                Ok(query_items) => items.extend(query_items),
                Err(e) => warn!("YouTube search '{}' failed: {}", query, e),
            }
        }

        Ok(items)
    }
}
