use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Processing mode for AI enrichment
    #[serde(default)]
    pub mode: ProcessingMode,

    /// Data source config
    #[serde(default)]
    pub sources: SourcesConfig,

    /// AI enrichment config
    #[serde(default)]
    pub ai: AiConfig,

    /// Report output config
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// How enrichment calls reach the model
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    // @mode: Direct HTTP API calls
    #[default]
    Api,
    // @mode: Shell out to the claude CLI
    Cli,
}

impl ProcessingMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Api => "api".to_string(),
            Self::Cli => "cli".to_string(),
        }
    }
}

// Implement Display trait for ProcessingMode
impl std::fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for ProcessingMode
impl std::str::FromStr for ProcessingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "cli" => Ok(Self::Cli),
            _ => Err(anyhow!("Invalid processing mode: {}", s)),
        }
    }
}

/// Per-source enablement and parameters
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SourcesConfig {
    /// RSS feed polling
    #[serde(default)]
    pub rss: RssSourceConfig,

    /// Twitter-style search
    #[serde(default)]
    pub twitter: TwitterSourceConfig,

    /// YouTube search
    #[serde(default)]
    pub youtube: YouTubeSourceConfig,

    /// Reddit hot listings
    #[serde(default)]
    pub reddit: RedditSourceConfig,
}

/// One RSS feed entry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeedConfig {
    /// Display name used as the item source
    pub name: String,

    /// Feed URL
    pub url: String,

    /// Report category for items from this feed
    #[serde(default = "default_rss_category")]
    pub category: String,
}

/// RSS source configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RssSourceConfig {
    /// Whether this source is polled
    #[serde(default)]
    pub enabled: bool,

    /// Feeds to poll
    #[serde(default)]
    pub feeds: Vec<FeedConfig>,
}

/// Twitter source configuration (twitterapi.io advanced search)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TwitterSourceConfig {
    /// Whether this source is polled
    #[serde(default)]
    pub enabled: bool,

    /// Search queries to run
    #[serde(default = "default_queries")]
    pub queries: Vec<String>,

    /// Max tweets kept per query
    #[serde(default = "default_twitter_max_results")]
    pub max_results: usize,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_twitter_api_key_env")]
    pub api_key_env: String,
}

impl Default for TwitterSourceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            queries: default_queries(),
            max_results: default_twitter_max_results(),
            api_key_env: default_twitter_api_key_env(),
        }
    }
}

/// YouTube source configuration (Data API v3)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct YouTubeSourceConfig {
    /// Whether this source is polled
    #[serde(default)]
    pub enabled: bool,

    /// Search queries to run
    #[serde(default = "default_queries")]
    pub queries: Vec<String>,

    /// Max videos kept per query
    #[serde(default = "default_youtube_max_results")]
    pub max_results: usize,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_youtube_api_key_env")]
    pub api_key_env: String,
}

impl Default for YouTubeSourceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            queries: default_queries(),
            max_results: default_youtube_max_results(),
            api_key_env: default_youtube_api_key_env(),
        }
    }
}

/// Reddit source configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RedditSourceConfig {
    /// Whether this source is polled
    #[serde(default)]
    pub enabled: bool,

    /// Subreddits to poll
    #[serde(default = "default_subreddits")]
    pub subreddits: Vec<String>,

    /// Minimum upvote score a post needs
    #[serde(default = "default_reddit_min_score")]
    pub min_score: i64,

    /// Age window in hours
    #[serde(default = "default_reddit_hours")]
    pub hours: i64,
}

impl Default for RedditSourceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            subreddits: default_subreddits(),
            min_score: default_reddit_min_score(),
            hours: default_reddit_hours(),
        }
    }
}

/// Which enrichment tasks are requested from the model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AiTasksConfig {
    /// Translate titles into Chinese
    #[serde(default = "default_true")]
    pub translate: bool,

    /// Produce a short summary per title
    #[serde(default = "default_true")]
    pub summarize: bool,
}

impl Default for AiTasksConfig {
    fn default() -> Self {
        Self {
            translate: true,
            summarize: true,
        }
    }
}

/// AI enrichment configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AiConfig {
    /// Whether enrichment runs at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Model identifier passed to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Max output tokens per completion call
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max items per enrichment batch
    #[serde(default = "default_max_batch_items")]
    pub max_batch_items: usize,

    /// Max accumulated title characters per enrichment batch
    #[serde(default = "default_max_batch_chars")]
    pub max_batch_chars: usize,

    /// Requested enrichment tasks
    #[serde(default)]
    pub tasks: AiTasksConfig,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Name of the environment variable holding an alternate endpoint base
    #[serde(default = "default_base_url_env")]
    pub base_url_env: String,

    /// Optional path to a prompt catalog file; built-in defaults when unset
    #[serde(default)]
    pub prompts_path: Option<String>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            max_batch_items: default_max_batch_items(),
            max_batch_chars: default_max_batch_chars(),
            tasks: AiTasksConfig::default(),
            api_key_env: default_api_key_env(),
            base_url_env: default_base_url_env(),
            prompts_path: None,
        }
    }
}

/// Report output configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory the report files are written into
    #[serde(default = "default_output_dir")]
    pub dir: String,

    /// Whether a data.json dump is written alongside the HTML report
    #[serde(default = "default_true")]
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            json: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_rss_category() -> String {
    "RSS".to_string()
}

fn default_queries() -> Vec<String> {
    vec!["AI".to_string()]
}

fn default_twitter_max_results() -> usize {
    20
}

fn default_youtube_max_results() -> usize {
    10
}

fn default_twitter_api_key_env() -> String {
    "TWITTER_API_KEY".to_string()
}

fn default_youtube_api_key_env() -> String {
    "YOUTUBE_API_KEY".to_string()
}

fn default_subreddits() -> Vec<String> {
    vec!["artificial".to_string()]
}

fn default_reddit_min_score() -> i64 {
    50
}

fn default_reddit_hours() -> i64 {
    24
}

fn default_model() -> String {
    "deepseek-ai/DeepSeek-V3".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_batch_items() -> usize {
    5
}

fn default_max_batch_chars() -> usize {
    2000
}

fn default_api_key_env() -> String {
    "ANTHROPIC_API_KEY".to_string()
}

fn default_base_url_env() -> String {
    "ANTHROPIC_BASE_URL".to_string()
}

fn default_output_dir() -> String {
    "docs".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.ai.max_batch_items == 0 {
            return Err(anyhow!("ai.max_batch_items must be at least 1"));
        }

        if self.ai.max_batch_chars == 0 {
            return Err(anyhow!("ai.max_batch_chars must be at least 1"));
        }

        if self.ai.model.is_empty() {
            return Err(anyhow!("ai.model must not be empty"));
        }

        // API mode needs to know which env var to read the credential from
        if self.mode == ProcessingMode::Api && self.ai.api_key_env.is_empty() {
            return Err(anyhow!("ai.api_key_env is required in api mode"));
        }

        if self.output.dir.is_empty() {
            return Err(anyhow!("output.dir must not be empty"));
        }

        Ok(())
    }

    /// Resolve the API key from the configured environment variable.
    /// Empty when the variable is unset.
    pub fn resolve_api_key(&self) -> String {
        std::env::var(&self.ai.api_key_env).unwrap_or_default()
    }

    /// Resolve the alternate endpoint base from the configured environment
    /// variable, if set
    pub fn resolve_base_url(&self) -> Option<String> {
        std::env::var(&self.ai.base_url_env).ok().filter(|v| !v.is_empty())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            mode: ProcessingMode::default(),
            sources: SourcesConfig::default(),
            ai: AiConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
