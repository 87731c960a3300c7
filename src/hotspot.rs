/*!
 * Hot topic data entity.
 *
 * A HotspotItem is one aggregated record: a title plus source metadata and
 * two enrichment fields populated by the AI pipeline.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One aggregated hot-topic record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotItem {
    /// Original title as collected from the source
    pub title: String,

    /// Link to the original content
    #[serde(default)]
    pub url: String,

    /// Human-readable source name (e.g. feed name, "Twitter", "r/rust")
    #[serde(default)]
    pub source: String,

    /// Report category the item is grouped under
    #[serde(default)]
    pub category: String,

    /// Publication time if the source provided one
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Chinese translation of the title, empty until enrichment
    #[serde(default)]
    pub translated_title: String,

    /// Short summary, empty until enrichment
    #[serde(default)]
    pub summary: String,

    /// Source-specific metadata (likes, scores, authors, ...), passed
    /// through the enrichment core untouched
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl HotspotItem {
    /// Create an item with the given title and source metadata.
    /// Enrichment fields start empty.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            source: source.into(),
            category: category.into(),
            published_at: None,
            translated_title: String::new(),
            summary: String::new(),
            extra: Map::new(),
        }
    }

    /// Set the publication time
    pub fn with_published_at(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Attach a piece of source-specific metadata
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Whether at least one enrichment field has been populated
    pub fn is_enriched(&self) -> bool {
        !self.translated_title.is_empty() || !self.summary.is_empty()
    }
}
