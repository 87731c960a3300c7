use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde_json::Value;

use crate::app_config::{FeedConfig, RssSourceConfig};
use crate::hotspot::HotspotItem;

use super::Collector;

/// Max entries kept per feed
const MAX_ENTRIES_PER_FEED: usize = 20;

/// RSS/Atom feed collector
pub struct RssCollector {
    config: RssSourceConfig,
    client: Client,
}

impl RssCollector {
    /// Create a collector for the configured feeds
    pub fn new(config: RssSourceConfig) -> Self {
        Self {
            config,
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch and parse one feed
    async fn collect_feed(&self, feed_config: &FeedConfig) -> Result<Vec<HotspotItem>> {
        let bytes = self
            .client
            .get(&feed_config.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let feed = feed_rs::parser::parse(&bytes[..])?;

        let items = feed
            .entries
            .into_iter()
            .take(MAX_ENTRIES_PER_FEED)
            .map(|entry| {
                let title = entry.title.map(|t| t.content).unwrap_or_default();
                let url = entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default();
                let published = entry.published.or(entry.updated);
                let author = entry
                    .authors
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                let tags: Vec<Value> = entry
                    .categories
                    .iter()
                    .map(|c| Value::String(c.term.clone()))
                    .collect();

                HotspotItem::new(title, url, &feed_config.name, &feed_config.category)
                    .with_published_at(published)
                    .with_extra("author", Value::String(author))
                    .with_extra("tags", Value::Array(tags))
            })
            .collect();

        Ok(items)
    }
}

#[async_trait]
impl Collector for RssCollector {
    fn name(&self) -> &'static str {
        "rss"
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    async fn collect(&self) -> Result<Vec<HotspotItem>> {
        let mut items = Vec::new();

        for feed_config in &self.config.feeds {
            match self.collect_feed(feed_config).await {
                Ok(feed_items) => items.extend(feed_items),
                Err(e) => warn!("Failed to collect feed '{}': {}", feed_config.name, e),
            }
        }

        Ok(items)
    }
}
