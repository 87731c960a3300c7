/*!
 * Prompt management for AI enrichment tasks.
 *
 * This module contains the task-driven prompt catalog and rendering:
 * - `manager`: catalog loading, model-family overrides, variable substitution
 */

pub mod manager;

pub use manager::{PromptManager, TaskPrompt};
