// Main entry point
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod captions;
mod errors;
mod export;
mod keywords;
mod providers;
mod summarization;
mod video_utils;

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
    /// Digest a YouTube video into a keyword-highlighted summary (default command)
    #[command(alias = "digest")]
    Digest(DigestArgs),

    /// Generate shell completions for ytdigest
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct DigestArgs {
    /// YouTube video URL or bare 11-character video id
    #[arg(value_name = "VIDEO")]
    video: String,

    /// Output directory for the text and PDF artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Caption language code (e.g., 'en', 'es', 'fr')
    #[arg(long)]
    language: Option<String>,

    /// Number of keywords to extract and highlight
    #[arg(short, long)]
    keywords: Option<usize>,

    /// Run the dual-pass summary quality gate
    #[arg(short, long)]
    quality_gate: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytdigest - YouTube transcript digests
///
/// Fetches the captions of a YouTube video, condenses them with an AI
/// summarization model and exports the result as text and PDF.
#[derive(Parser, Debug)]
#[command(name = "ytdigest")]
#[command(author = "ytdigest Team")]
#[command(version = "1.0.0")]
#[command(about = "AI-powered YouTube video summarizer")]
#[command(long_about = "ytdigest fetches YouTube captions and condenses them into a short summary.

EXAMPLES:
    ytdigest https://www.youtube.com/watch?v=dQw4w9WgXcQ   # Digest using default config
    ytdigest dQw4w9WgXcQ                                   # Bare video id works too
    ytdigest -o digests/ dQw4w9WgXcQ                       # Choose the output directory
    ytdigest --language fr dQw4w9WgXcQ                     # Prefer French captions
    ytdigest -k 8 -q dQw4w9WgXcQ                           # More keywords, quality gate on
    ytdigest --log-level debug dQw4w9WgXcQ                 # Verbose logging
    ytdigest completions bash > ytdigest.bash              # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The Hugging Face API key is read from the
    YTDIGEST_API_KEY environment variable when not set in the config file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// YouTube video URL or bare 11-character video id
    #[arg(value_name = "VIDEO")]
    video: Option<String>,

    /// Output directory for the text and PDF artifacts
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Caption language code (e.g., 'en', 'es', 'fr')
    #[arg(long)]
    language: Option<String>,

    /// Number of keywords to extract and highlight
    #[arg(short, long)]
    keywords: Option<usize>,

    /// Run the dual-pass summary quality gate
    #[arg(short, long)]
    quality_gate: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

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
            let emoji = Self::get_emoji_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
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
            generate(shell, &mut cmd, "ytdigest", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Digest(args)) => run_digest(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let video = cli
                .video
                .ok_or_else(|| anyhow!("VIDEO is required when no subcommand is specified"))?;

            let digest_args = DigestArgs {
                video,
                output_dir: cli.output_dir,
                language: cli.language,
                keywords: cli.keywords,
                quality_gate: cli.quality_gate,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_digest(digest_args).await
        }
    }
}

async fn run_digest(options: DigestArgs) -> Result<()> {
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
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.captions.language = language.clone();
    }

    if let Some(keyword_count) = options.keywords {
        config.keywords.count = keyword_count;
    }

    if options.quality_gate {
        config.summarizer.quality_gate = true;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // The API key can also come from the environment
    if config.summarizer.api_key.is_empty() {
        if let Ok(api_key) = std::env::var("YTDIGEST_API_KEY") {
            config.summarizer.api_key = api_key;
        }
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and run the pipeline
    let controller = Controller::with_config(config)?;
    let outcome = controller.run(&options.video, &options.output_dir).await?;

    info!("Summary of '{}':", outcome.video_id);
    println!("{}", outcome.highlighted);
    info!(
        "Artifacts: {} and {}",
        outcome.text_path.display(),
        outcome.pdf_path.display()
    );

    Ok(())
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
