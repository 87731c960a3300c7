/*!
 * AI enrichment core.
 *
 * This module contains the batch pipeline that populates translated titles
 * and summaries on collected items:
 * - `planner`: sizes the next batch against item and character budgets
 * - `parser`: extracts structured results from free-form model output
 * - `orchestrator`: the batch loop with degrade-and-retry
 */

pub mod planner;
pub mod parser;
pub mod orchestrator;

pub use orchestrator::BatchOrchestrator;
pub use parser::ParsedResult;
pub use planner::BatchPlanner;
