/*!
 * Batch enrichment orchestration.
 *
 * This module contains the control loop that drives AI enrichment of the
 * item list: plan a batch, dispatch it through the completion client, map
 * the parsed response back onto the items, and degrade failed multi-item
 * batches to single-item retries.
 */

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, error, warn};

use crate::app_config::AiConfig;
use crate::errors::EnrichmentError;
use crate::hotspot::HotspotItem;
use crate::prompts::manager::TRANSLATE_SUMMARIZE_TASK;
use crate::prompts::PromptManager;
use crate::providers::{CompletionClient, CompletionRequest};

use super::parser;
use super::planner::BatchPlanner;

/// Drives batched AI enrichment over a collected item sequence
pub struct BatchOrchestrator {
    /// The completion client to dispatch through
    client: Arc<dyn CompletionClient>,

    /// Prompt catalog
    prompts: PromptManager,

    /// Enrichment configuration (model, budgets, token cap)
    config: AiConfig,
}

impl BatchOrchestrator {
    /// Create a new orchestrator
    pub fn new(client: Arc<dyn CompletionClient>, prompts: PromptManager, config: AiConfig) -> Self {
        Self {
            client,
            prompts,
            config,
        }
    }

    /// Enrich the items in place and return the same sequence.
    ///
    /// Items are processed in contiguous batches sized by the planner.
    /// A batch whose call fails or whose response does not cover every item
    /// is retried once as single-item batches; a single item that still
    /// fails is left unenriched. Never returns an error: partial enrichment
    /// is preferred over aborting the run.
    pub async fn process(
        &self,
        mut items: Vec<HotspotItem>,
        translate: bool,
        summarize: bool,
    ) -> Vec<HotspotItem> {
        if items.is_empty() || (!translate && !summarize) {
            return items;
        }

        // A broken catalog is fatal for the whole run: bail before any call
        // so the items come back untouched.
        if let Err(e) = self.prompts.get_prompt(
            TRANSLATE_SUMMARIZE_TASK,
            Some(&self.config.model),
            &HashMap::new(),
        ) {
            error!("Enrichment disabled: {}", e);
            return items;
        }

        let planner = BatchPlanner::new(self.config.max_batch_items, self.config.max_batch_chars);
        let total = items.len();
        let mut cursor = 0;

        while cursor < total {
            let size = planner.next_batch_size(&items, cursor);
            let end = cursor + size;
            let batch = &mut items[cursor..end];

            debug!("Enriching items {}..{} of {}", cursor + 1, end, total);

            let fully_covered = match Self::dispatch(
                &*self.client,
                &self.prompts,
                &self.config,
                batch,
                translate,
                summarize,
            )
            .await
            {
                Ok(covered) => covered,
                Err(e) => {
                    warn!("Batch {}..{} failed: {}", cursor + 1, end, e);
                    false
                }
            };

            if !fully_covered && size > 1 {
                warn!(
                    "Batch {}..{} incomplete, retrying {} items individually",
                    cursor + 1,
                    end,
                    size
                );
                for single in batch.chunks_mut(1) {
                    if let Err(e) = Self::dispatch(
                        &*self.client,
                        &self.prompts,
                        &self.config,
                        single,
                        translate,
                        summarize,
                    )
                    .await
                    {
                        // Terminal for this item: left unenriched
                        warn!("Retry for '{}' failed: {}", single[0].title, e);
                    }
                }
            }

            cursor = end;
        }

        items
    }

    /// Dispatch one batch: build the prompt, call the client, parse the
    /// response and write the retained results onto the slice. Returns
    /// whether the response covered every item in the batch.
    async fn dispatch(
        client: &dyn CompletionClient,
        prompts: &PromptManager,
        config: &AiConfig,
        batch: &mut [HotspotItem],
        translate: bool,
        summarize: bool,
    ) -> Result<bool, EnrichmentError> {
        let titles: Vec<String> = batch.iter().map(|item| item.title.clone()).collect();

        let mut variables = HashMap::new();
        variables.insert("titles".to_string(), PromptManager::format_content_list(&titles));
        variables.insert("count".to_string(), batch.len().to_string());
        variables.insert("tasks".to_string(), Self::task_description(translate, summarize));

        let prompt = prompts.get_prompt(TRANSLATE_SUMMARIZE_TASK, Some(&config.model), &variables)?;

        let request = CompletionRequest::new(&config.model, config.max_tokens)
            .system(prompt.system)
            .user(prompt.user);

        let response_text = client.complete(request).await?;

        let (results, fully_covered) = parser::parse(&response_text, batch.len());
        for result in results {
            let item = &mut batch[result.index - 1];
            item.translated_title = result.translated;
            item.summary = result.summary;
        }

        Ok(fully_covered)
    }

    /// Human-readable task description substituted into the prompt
    fn task_description(translate: bool, summarize: bool) -> String {
        let mut parts = Vec::new();
        if translate {
            parts.push("translate each title into Chinese");
        }
        if summarize {
            parts.push("write a concise summary (20-30 characters)");
        }
        parts.join(" and ")
    }
}
