use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::app_config::TwitterSourceConfig;
use crate::hotspot::HotspotItem;

use super::{parse_date, Collector};

const SEARCH_URL: &str = "https://api.twitterapi.io/twitter/tweet/advanced_search";

/// Tweet collector using the twitterapi.io advanced search endpoint
pub struct TwitterCollector {
    config: TwitterSourceConfig,
    api_key: String,
    client: Client,
}

/// Advanced search response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tweets: Vec<Tweet>,
}

/// One tweet as returned by the search endpoint
#[derive(Debug, Deserialize)]
struct Tweet {
    #[serde(default)]
    text: String,
    #[serde(default)]
    url: String,
    #[serde(rename = "createdAt", default)]
    created_at: String,
    #[serde(rename = "likeCount", default)]
    like_count: i64,
    #[serde(rename = "retweetCount", default)]
    retweet_count: i64,
    #[serde(rename = "viewCount", default)]
    view_count: i64,
}

impl TwitterCollector {
    /// Create a collector; the API key has already been resolved from the
    /// configured environment variable
    pub fn new(config: TwitterSourceConfig, api_key: String) -> Self {
        Self {
            config,
            api_key,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Run one search query
    async fn search(&self, query: &str) -> Result<Vec<HotspotItem>> {
        let response: SearchResponse = self
            .client
            .get(SEARCH_URL)
            .header("X-API-Key", &self.api_key)
            .query(&[("query", query), ("queryType", "Top")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = response
            .tweets
            .into_iter()
            .take(self.config.max_results)
            .map(|tweet| {
                HotspotItem::new(tweet.text, tweet.url, "Twitter", "Twitter")
                    .with_published_at(parse_date(&tweet.created_at))
                    .with_extra("likes", json!(tweet.like_count))
                    .with_extra("retweets", json!(tweet.retweet_count))
                    .with_extra("views", json!(tweet.view_count))
            })
            .collect();

        Ok(items)
    }
}

#[async_trait]
impl Collector for TwitterCollector {
    fn name(&self) -> &'static str {
        "twitter"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn collect(&self) -> Result<Vec<HotspotItem>> {
        if self.api_key.is_empty() {
            warn!("Twitter API key not configured ({})", self.config.api_key_env);
            return Ok(Vec::new());
        }

        let mut items = Vec::new();

        for query in &self.config.queries {
            match self.search(query).await {
                Ok(query_items) => items.extend(query_items),
                Err(e) => warn!("Twitter search '{}' failed: {}", query, e),
            }
        }

        Ok(items)
    }
}
