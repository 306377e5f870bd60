// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::Path;
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};
use url::Url;

use crate::app_config::Config;
use app_controller::{Controller, OutputFormat};

mod app_config;
mod app_controller;
mod content_extractor;
mod errors;
mod feed;
mod language_registry;
mod pipeline;
mod providers;
mod summarization;
mod translation;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Markdown,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Markdown => OutputFormat::Markdown,
            CliOutputFormat::Json => OutputFormat::Json,
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize and translate the entries of a feed (default command)
    #[command(alias = "summarize")]
    Process(ProcessArgs),

    /// List the supported languages
    Languages,

    /// Generate shell completions for transum
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ProcessArgs {
    /// Feed URL to process
    #[arg(value_name = "FEED_URL")]
    feed_url: Url,

    /// Source language of the feed (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language for the output (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Maximum number of entries to process
    #[arg(short, long)]
    entries_limit: Option<usize>,

    /// Output format for the processed entries
    #[arg(short, long, value_enum)]
    output: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long, default_value = "transum-conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// transum - Feed summarization and translation
///
/// Fetches an RSS or Atom feed, summarizes every entry and translates
/// the summaries into your target language using hosted transformer models.
#[derive(Parser, Debug)]
#[command(name = "transum")]
#[command(author = "Transum Team")]
#[command(version = "1.0.0")]
#[command(about = "Feed summarization and translation tool")]
#[command(long_about = "transum fetches an RSS or Atom feed, summarizes every entry and translates the
summaries into your target language using hosted transformer models.

EXAMPLES:
    transum https://example.com/feed.xml                # Process using default config
    transum -s es -t en https://example.com/feed.xml    # Spanish feed, English output
    transum -e 10 https://example.com/feed.xml          # Only the first 10 entries
    transum -o json https://example.com/feed.xml        # Emit JSON instead of Markdown
    transum languages                                   # List supported languages
    transum completions bash > transum.bash             # Generate bash completions

CONFIGURATION:
    Configuration is stored in transum-conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't exist,
    a default one will be created automatically. Set entries_limit to null in
    the config to process every entry of the feed.

SUPPORTED LANGUAGES:
    Greek (el), English (en), Spanish (es), French (fr), German (de),
    Italian (it). Feeds in a language other than English are routed through
    English before summarization.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Feed URL to process
    #[arg(value_name = "FEED_URL")]
    feed_url: Option<Url>,

    /// Source language of the feed (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language for the output (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Maximum number of entries to process
    #[arg(short, long)]
    entries_limit: Option<usize>,

    /// Output format for the processed entries
    #[arg(short, long, value_enum)]
    output: Option<CliOutputFormat>,

    /// Configuration file path
    #[arg(short, long, default_value = "transum-conf.json")]
    config_path: String,

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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = match record.level() {
                Level::Error => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;31m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Warn => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;33m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Info => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;32m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Debug => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;36m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
                Level::Trace => {
                    let emoji = Self::get_emoji_for_level(record.level());
                    writeln!(
                        stderr,
                        "\x1B[1;35m{} {} {}\x1B[0m",
                        now, emoji, record.args()
                    )
                },
            };
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

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "transum", &mut std::io::stdout());
            return Ok(());
        }
        Some(Commands::Languages) => {
            for spec in language_registry::SUPPORTED_LANGUAGES {
                println!(
                    "{:<10} {:<4} {}",
                    spec.display_name, spec.short_code, spec.script_code
                );
            }
            return Ok(());
        }
        Some(Commands::Process(args)) => {
            // Use the explicit process subcommand args
            return run_process(args).await;
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let feed_url = cli.feed_url.ok_or_else(|| {
                anyhow!("FEED_URL is required when no subcommand is specified")
            })?;

            let process_args = ProcessArgs {
                feed_url,
                source_language: cli.source_language,
                target_language: cli.target_language,
                entries_limit: cli.entries_limit,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            return run_process(process_args).await;
        }
    }
}

async fn run_process(options: ProcessArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        let log_level = match config_log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(log_level);
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(source_lang) = &options.source_language {
            config.source_language = source_lang.clone();
        }

        if let Some(target_lang) = &options.target_language {
            config.target_language = target_lang.clone();
        }

        if let Some(entries_limit) = options.entries_limit {
            config.entries_limit = Some(entries_limit);
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        // Apply command line overrides to the default config if specified
        if let Some(source_lang) = &options.source_language {
            config.source_language = source_lang.clone();
        }

        if let Some(target_lang) = &options.target_language {
            config.target_language = target_lang.clone();
        }

        if let Some(entries_limit) = options.entries_limit {
            config.entries_limit = Some(entries_limit);
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        let log_level = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };

        // Just update the max level without reinitializing the logger
        log::set_max_level(log_level);
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    let output = options.output.map(Into::into).unwrap_or_default();

    // Run the controller against the feed
    controller.run(&options.feed_url, output).await?;

    Ok(())
}
