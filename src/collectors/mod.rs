/*!
 * Data source collectors.
 *
 * This module contains pollers for each supported source:
 * - `rss`: configured RSS/Atom feeds
 * - `twitter`: twitterapi.io advanced search
 * - `youtube`: YouTube Data API v3 search
 * - `reddit`: subreddit hot listings
 */

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::hotspot::HotspotItem;

/// Common trait for all data source collectors
///
/// A collector owns its configuration and credentials; a per-source failure
/// is logged inside `collect` and surfaces as an empty or partial list so
/// the run continues with the remaining sources.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Short source identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether this source is enabled in the configuration
    fn is_enabled(&self) -> bool;

    /// Poll the source and return collected items
    async fn collect(&self) -> Result<Vec<HotspotItem>>;
}

/// Parse a date string in the formats the sources actually emit:
/// RFC 3339 / ISO 8601, RFC 2822, or the legacy Twitter format
pub(crate) fn parse_date(date_str: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(date_str) {
        return Some(dt.with_timezone(&Utc));
    }
    // e.g. "Wed Oct 10 20:19:24 +0000 2018"
    if let Ok(dt) = DateTime::parse_from_str(date_str, "%a %b %d %H:%M:%S %z %Y") {
        return Some(dt.with_timezone(&Utc));
    }
    None
}

pub mod rss;
pub mod twitter;
pub mod youtube;
pub mod reddit;

pub use rss::RssCollector;
pub use twitter::TwitterCollector;
pub use youtube::YouTubeCollector;
pub use reddit::RedditCollector;
