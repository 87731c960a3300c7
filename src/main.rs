// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;

use crate::app_config::{Config, ProcessingMode};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod collectors;
mod enrichment;
mod errors;
mod hotspot;
mod prompts;
mod providers;
mod report;

/// CLI Wrapper for ProcessingMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProcessingMode {
    Api,
    Cli,
}

impl From<CliProcessingMode> for ProcessingMode {
    fn from(cli_mode: CliProcessingMode) -> Self {
        match cli_mode {
            CliProcessingMode::Api => ProcessingMode::Api,
            CliProcessingMode::Cli => ProcessingMode::Cli,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// hotbrief - hot topic aggregation with AI enrichment
///
/// Collects hot topics from RSS feeds, Twitter, YouTube and Reddit,
/// translates and summarizes the titles with an AI model, and renders an
/// HTML/JSON report.
#[derive(Parser, Debug)]
#[command(name = "hotbrief")]
#[command(version = "0.1.0")]
#[command(about = "Hot topic aggregator with AI enrichment")]
#[command(long_about = "hotbrief collects hot topics from the configured sources, enriches the
titles with Chinese translations and short summaries via an AI model, and
renders an HTML report plus a JSON data dump.

EXAMPLES:
    hotbrief                          # Run with the default config
    hotbrief -m cli                   # Use the claude CLI instead of the API
    hotbrief -c my-conf.json          # Use a specific config file
    hotbrief -o public                # Write the report into ./public
    hotbrief --log-level debug        # Verbose logging

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file
    doesn't exist, a default one will be created automatically. API
    credentials come from environment variables whose names are themselves
    configurable (ANTHROPIC_API_KEY by default).")]
struct CommandLineOptions {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Processing mode for AI enrichment
    #[arg(short, long, value_enum)]
    mode: Option<CliProcessingMode>,

    /// Model name to use for enrichment
    #[arg(long)]
    model: Option<String>,

    /// Output directory for the report
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");

            let mut stderr = std::io::stderr();
            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let options = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(mode) = &options.mode {
        config.mode = mode.clone().into();
    }

    if let Some(model) = &options.model {
        config.ai.model = model.clone();
    }

    if let Some(output_dir) = &options.output_dir {
        config.output.dir = output_dir.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // Create and run the controller
    let controller = Controller::with_config(config)?;
    controller.run().await
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
