/*!
 * Application controller.
 *
 * Wires the collectors, the enrichment orchestrator and the report
 * generator together and runs the collect -> enrich -> render pipeline.
 */

use std::sync::Arc;

use anyhow::Result;
use log::{error, info, warn};

use crate::app_config::{Config, ProcessingMode};
use crate::collectors::{Collector, RedditCollector, RssCollector, TwitterCollector, YouTubeCollector};
use crate::enrichment::BatchOrchestrator;
use crate::hotspot::HotspotItem;
use crate::prompts::PromptManager;
use crate::providers::anthropic::{Anthropic, AnthropicCredentials};
use crate::providers::claude_cli::ClaudeCli;
use crate::providers::CompletionClient;
use crate::report::ReportGenerator;

/// Main controller that runs the aggregation pipeline
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the full pipeline: collect, enrich, render
    pub async fn run(&self) -> Result<()> {
        info!("Running in {} mode", self.config.mode);

        let items = self.collect_all().await;
        info!("Collected {} items in total", items.len());

        let items = self.enrich(items).await;

        let generator = ReportGenerator::new(self.config.output.clone());
        let report_path = generator.generate(&items)?;
        info!("Report generated: {:?}", report_path);

        Ok(())
    }

    /// Poll every enabled source; per-source failures log and continue
    async fn collect_all(&self) -> Vec<HotspotItem> {
        let sources = &self.config.sources;
        let collectors: Vec<Box<dyn Collector>> = vec![
            Box::new(RssCollector::new(sources.rss.clone())),
            Box::new(TwitterCollector::new(
                sources.twitter.clone(),
                std::env::var(&sources.twitter.api_key_env).unwrap_or_default(),
            )),
            Box::new(YouTubeCollector::new(
                sources.youtube.clone(),
                std::env::var(&sources.youtube.api_key_env).unwrap_or_default(),
            )),
            Box::new(RedditCollector::new(sources.reddit.clone())),
        ];

        let mut items = Vec::new();
        for collector in &collectors {
            if !collector.is_enabled() {
                continue;
            }

            info!("Collecting from {}...", collector.name());
            match collector.collect().await {
                Ok(collected) => {
                    info!("{} yielded {} items", collector.name(), collected.len());
                    items.extend(collected);
                }
                Err(e) => error!("Collector {} failed: {}", collector.name(), e),
            }
        }

        items
    }

    /// Run AI enrichment over the collected items when enabled and
    /// configured; on a configuration problem the items pass through
    /// unmodified
    async fn enrich(&self, items: Vec<HotspotItem>) -> Vec<HotspotItem> {
        let ai = &self.config.ai;

        if !ai.enabled {
            info!("AI enrichment disabled, skipping");
            return items;
        }
        if items.is_empty() {
            return items;
        }

        let client: Arc<dyn CompletionClient> = match self.config.mode {
            ProcessingMode::Api => {
                let api_key = self.config.resolve_api_key();
                if api_key.is_empty() {
                    warn!("No API key in {}, skipping enrichment", ai.api_key_env);
                    return items;
                }
                let credentials = AnthropicCredentials::new(api_key)
                    .with_base_url(self.config.resolve_base_url());
                Arc::new(Anthropic::new(credentials, ai.timeout_secs))
            }
            ProcessingMode::Cli => Arc::new(ClaudeCli::new(ai.timeout_secs)),
        };

        let prompts = match &ai.prompts_path {
            Some(path) => match PromptManager::from_file(path) {
                Ok(manager) => manager,
                Err(e) => {
                    error!("Failed to load prompt catalog from {}: {}", path, e);
                    return items;
                }
            },
            None => PromptManager::new(),
        };

        info!("Starting AI enrichment of {} items...", items.len());
        let orchestrator = BatchOrchestrator::new(client, prompts, ai.clone());
        orchestrator
            .process(items, ai.tasks.translate, ai.tasks.summarize)
            .await
    }
}
