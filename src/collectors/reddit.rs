use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::app_config::RedditSourceConfig;
use crate::hotspot::HotspotItem;

use super::Collector;

const BASE_URL: &str = "https://www.reddit.com";
const USER_AGENT: &str = "hotbrief/0.1";

/// Subreddit hot-listing collector
pub struct RedditCollector {
    config: RedditSourceConfig,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
struct Post {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    ups: i64,
    #[serde(default)]
    num_comments: i64,
    #[serde(default)]
    author: String,
}

impl RedditCollector {
    /// Create a collector for the configured subreddits
    pub fn new(config: RedditSourceConfig) -> Self {
        Self {
            config,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch the hot listing of one subreddit, filtered by score and age
    async fn fetch_subreddit(&self, subreddit: &str) -> Result<Vec<HotspotItem>> {
        let url = format!("{}/r/{}/hot.json", BASE_URL, subreddit);

        let listing: Listing = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let cutoff = Utc::now().timestamp() - self.config.hours * 3600;

        let items = listing
            .data
            .children
            .into_iter()
            .map(|post| post.data)
            .filter(|post| post.created_utc as i64 >= cutoff && post.ups >= self.config.min_score)
            .map(|post| {
                let published = DateTime::<Utc>::from_timestamp(post.created_utc as i64, 0);

                HotspotItem::new(
                    post.title,
                    format!("{}{}", BASE_URL, post.permalink),
                    format!("r/{}", subreddit),
                    "Reddit",
                )
                .with_published_at(published)
                .with_extra("score", json!(post.ups))
                .with_extra("comments", json!(post.num_comments))
                .with_extra("author", json!(post.author))
            })
            .collect();

        Ok(items)
    }
}

#[async_trait]
impl Collector for RedditCollector {
    fn name(&self) -> &'static str {
        "reddit"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn collect(&self) -> Result<Vec<HotspotItem>> {
        let mut items = Vec::new();

        for subreddit in &self.config.subreddits {
            match self.fetch_subreddit(subreddit).await {
                Ok(sub_items) => items.extend(sub_items),
                Err(e) => warn!("Failed to collect r/{}: {}", subreddit, e),
            }
        }

        Ok(items)
    }
}
