/*!
 * Report generation.
 *
 * Renders the final item sequence into an HTML page grouped by category,
 * plus an optional JSON dump of the raw data.
 */

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use html_escape::{encode_double_quoted_attribute, encode_text};
use log::info;

use crate::app_config::OutputConfig;
use crate::hotspot::HotspotItem;

/// HTML/JSON report generator
pub struct ReportGenerator {
    config: OutputConfig,
}

impl ReportGenerator {
    /// Create a generator for the configured output directory
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write the report files and return the path of the HTML page
    pub fn generate(&self, items: &[HotspotItem]) -> Result<PathBuf> {
        let output_dir = Path::new(&self.config.dir);
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory: {}", self.config.dir))?;

        let html_path = output_dir.join("index.html");
        fs::write(&html_path, self.render_html(items))
            .with_context(|| format!("Failed to write {:?}", html_path))?;

        if self.config.json {
            let json_path = output_dir.join("data.json");
            let data = serde_json::to_string_pretty(items)
                .context("Failed to serialize items to JSON")?;
            fs::write(&json_path, data)
                .with_context(|| format!("Failed to write {:?}", json_path))?;
        }

        info!("Report written to {:?} ({} items)", html_path, items.len());
        Ok(html_path)
    }

    /// Render the HTML page, items grouped under category sections
    fn render_html(&self, items: &[HotspotItem]) -> String {
        let mut by_category: BTreeMap<&str, Vec<&HotspotItem>> = BTreeMap::new();
        for item in items {
            by_category.entry(item.category.as_str()).or_default().push(item);
        }

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str("<title>Hot Topics</title>\n");
        html.push_str("<style>\n");
        html.push_str(
            "body{font-family:system-ui,sans-serif;max-width:860px;margin:0 auto;padding:1rem;color:#222}\n\
             h1{font-size:1.5rem}\n\
             h2{font-size:1.15rem;border-bottom:1px solid #ddd;padding-bottom:.3rem;margin-top:2rem}\n\
             .meta{color:#777;font-size:.85rem}\n\
             .item{margin:1rem 0}\n\
             .item .summary{margin:.25rem 0 0;color:#444}\n\
             a{color:#0860c4;text-decoration:none}\n\
             a:hover{text-decoration:underline}\n",
        );
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&format!(
            "<h1>Hot Topics</h1>\n<p class=\"meta\">{} &middot; {} items</p>\n",
            Local::now().format("%Y-%m-%d %H:%M"),
            items.len()
        ));

        for (category, category_items) in &by_category {
            html.push_str(&format!(
                "<h2>{} ({})</h2>\n",
                encode_text(category),
                category_items.len()
            ));

            for item in category_items {
                let display_title = if item.translated_title.is_empty() {
                    &item.title
                } else {
                    &item.translated_title
                };

                html.push_str("<div class=\"item\">\n");
                // The href sits in a double-quoted attribute, so quotes in
                // collected URLs must be escaped too
                html.push_str(&format!(
                    "<a href=\"{}\">{}</a>\n",
                    encode_double_quoted_attribute(&item.url),
                    encode_text(display_title)
                ));

                // Show the original alongside a translation
                if !item.translated_title.is_empty() {
                    html.push_str(&format!(
                        "<div class=\"meta\">{}</div>\n",
                        encode_text(&item.title)
                    ));
                }

                if !item.summary.is_empty() {
                    html.push_str(&format!(
                        "<p class=\"summary\">{}</p>\n",
                        encode_text(&item.summary)
                    ));
                }

                let published = item
                    .published_at
                    .map(|dt| dt.format("%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                html.push_str(&format!(
                    "<div class=\"meta\">{} {}</div>\n",
                    encode_text(&item.source),
                    published
                ));
                html.push_str("</div>\n");
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}
