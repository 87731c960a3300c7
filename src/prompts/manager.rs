/*!
 * Task-driven prompt catalog.
 *
 * Tasks map to a default system/user template pair plus optional per-model
 * overrides, keyed by a coarse model family. Templates carry `{name}`
 * placeholders that are substituted at render time.
 */

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::EnrichmentError;

/// Known model families, matched as case-insensitive substrings of the model
/// identifier. Order matters: the first match wins.
const MODEL_FAMILIES: &[&str] = &["qwen", "glm", "deepseek"];

/// Task name used for the title translation + summary enrichment step
pub const TRANSLATE_SUMMARIZE_TASK: &str = "translate_summarize";

/// A rendered prompt pair ready to send to a provider
#[derive(Debug, Clone, PartialEq)]
pub struct TaskPrompt {
    /// System prompt, possibly empty
    pub system: String,

    /// User prompt
    pub user: String,
}

/// Default system/user template pair for a task
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplatePair {
    /// System template
    #[serde(default)]
    pub system: String,

    /// User template
    #[serde(default)]
    pub user: String,
}

/// Per-model-family override; each half independently replaces the default
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateOverride {
    /// Replacement system template, if any
    #[serde(default)]
    pub system: Option<String>,

    /// Replacement user template, if any
    #[serde(default)]
    pub user: Option<String>,
}

/// One task entry in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskConfig {
    /// Default templates
    #[serde(default)]
    pub default: TemplatePair,

    /// Family-keyed overrides
    #[serde(default)]
    pub models: HashMap<String, TemplateOverride>,
}

/// Prompt catalog file shape
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PromptCatalog {
    /// Task name to task config
    #[serde(default)]
    tasks: HashMap<String, TaskConfig>,
}

/// Manager resolving task + model into rendered prompts
#[derive(Debug, Clone)]
pub struct PromptManager {
    catalog: PromptCatalog,
}

impl PromptManager {
    /// Create a manager with the built-in task catalog
    pub fn new() -> Self {
        let mut tasks = HashMap::new();
        tasks.insert(
            TRANSLATE_SUMMARIZE_TASK.to_string(),
            TaskConfig {
                default: TemplatePair {
                    system: DEFAULT_SYSTEM_TEMPLATE.to_string(),
                    user: DEFAULT_USER_TEMPLATE.to_string(),
                },
                models: HashMap::new(),
            },
        );

        Self {
            catalog: PromptCatalog { tasks },
        }
    }

    /// Create a manager with no tasks registered
    pub fn empty() -> Self {
        Self {
            catalog: PromptCatalog::default(),
        }
    }

    /// Register or replace a task in the catalog
    pub fn with_task(mut self, name: impl Into<String>, config: TaskConfig) -> Self {
        self.catalog.tasks.insert(name.into(), config);
        self
    }

    /// Load a catalog from a JSON file, replacing the built-in tasks
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog: PromptCatalog = serde_json::from_str(&content)?;
        Ok(Self { catalog })
    }

    /// List the available task names
    pub fn task_names(&self) -> Vec<&str> {
        self.catalog.tasks.keys().map(|k| k.as_str()).collect()
    }

    /// Resolve a task and model into rendered system/user prompts.
    ///
    /// Starts from the task's default templates; if the model maps to a
    /// family with an override, the override replaces the corresponding
    /// template. Every `{name}` placeholder present in the chosen template is
    /// replaced with the variable's value; placeholders without a matching
    /// variable are left intact. Outputs are trimmed.
    pub fn get_prompt(
        &self,
        task_name: &str,
        model: Option<&str>,
        variables: &HashMap<String, String>,
    ) -> Result<TaskPrompt, EnrichmentError> {
        let task = self
            .catalog
            .tasks
            .get(task_name)
            .ok_or_else(|| EnrichmentError::Configuration(format!("unknown prompt task: {}", task_name)))?;

        let mut system = task.default.system.clone();
        let mut user = task.default.user.clone();

        if let Some(model) = model {
            let family = Self::normalize_model_key(model);
            if let Some(override_config) = task.models.get(&family) {
                if let Some(s) = &override_config.system {
                    system = s.clone();
                }
                if let Some(u) = &override_config.user {
                    user = u.clone();
                }
            }
        }

        Ok(TaskPrompt {
            system: Self::render(&system, variables).trim().to_string(),
            user: Self::render(&user, variables).trim().to_string(),
        })
    }

    /// Normalize a model identifier to a coarse family key
    pub fn normalize_model_key(model: &str) -> String {
        let model_lower = model.to_lowercase();
        for family in MODEL_FAMILIES {
            if model_lower.contains(family) {
                return family.to_string();
            }
        }
        model_lower
    }

    /// Replace `{name}` placeholders present in the template. No recursion:
    /// substituted values are not scanned for further placeholders.
    fn render(template: &str, variables: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in variables {
            let placeholder = format!("{{{}}}", key);
            if result.contains(&placeholder) {
                result = result.replace(&placeholder, value);
            }
        }
        result
    }

    /// Format titles as a 1-based numbered list, one per line
    pub fn format_content_list(items: &[String]) -> String {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for PromptManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in system template for the enrichment task
const DEFAULT_SYSTEM_TEMPLATE: &str = r#"You are a news assistant processing hot-topic headlines.
Return ONLY a JSON array matching the requested schema, with no text outside the JSON."#;

/// Built-in user template for the enrichment task
const DEFAULT_USER_TEMPLATE: &str = r#"Process the following {count} headlines: {tasks}.

{titles}

Return JSON in exactly this format:
[{"index": 1, "translated": "Chinese title", "summary": "short summary"}]"#;
