/*!
 * # hotbrief
 *
 * A Rust tool that aggregates hot topics from several online sources and
 * enriches them with AI-generated translations and summaries.
 *
 * ## Features
 *
 * - Collect items from RSS feeds, Twitter-style search, YouTube search and
 *   Reddit hot listings
 * - Enrich titles (Chinese translation + short summary) in batches through
 *   either the Anthropic API or the claude CLI
 * - Degrade failed batches to single-item retries; partial enrichment is
 *   preferred over aborting the run
 * - Render an HTML report plus a JSON data dump
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `hotspot`: The aggregated item data entity
 * - `collectors`: Pollers for each data source
 * - `enrichment`: The AI batch pipeline:
 *   - `enrichment::planner`: Batch sizing against item/char budgets
 *   - `enrichment::parser`: Best-effort extraction of model results
 *   - `enrichment::orchestrator`: Batch loop with degrade-and-retry
 * - `prompts`: Task-driven prompt catalog with model-family overrides
 * - `providers`: Completion clients (Anthropic API, claude CLI)
 * - `report`: HTML/JSON report generation
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod collectors;
pub mod enrichment;
pub mod errors;
pub mod hotspot;
pub mod prompts;
pub mod providers;
pub mod report;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use enrichment::{BatchOrchestrator, BatchPlanner, ParsedResult};
pub use errors::{AppError, EnrichmentError, ProviderError};
pub use hotspot::HotspotItem;
pub use prompts::PromptManager;
