// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::app_controller::{Controller, TranscriptRequest};
use crate::transcript::OutputFormat;

mod app_config;
mod app_controller;
mod cue;
mod errors;
mod language_utils;
mod providers;
mod time_utils;
mod transcript;
mod video_ref;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Plain,
    Structured,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Structured => OutputFormat::Structured,
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
    /// Fetch a video's captions and render a transcript (default command)
    #[command(alias = "get")]
    Transcript(TranscriptArgs),

    /// Show identifier, duration, and caption availability for a video
    Info(InfoArgs),

    /// Generate shell completions for ytscribe
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranscriptArgs {
    /// Video URL to transcribe
    #[arg(value_name = "URL")]
    url: String,

    /// Caption language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Annotate output with timestamps
    #[arg(short = 't', long)]
    timestamps: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "structured")]
    format: CliOutputFormat,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Video URL to inspect
    #[arg(value_name = "URL")]
    url: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytscribe - YouTube caption-to-transcript tool
///
/// Fetches a video's caption track and renders it as a readable transcript
/// in several shapes, from flat prose to a sectioned document.
#[derive(Parser, Debug)]
#[command(name = "ytscribe")]
#[command(version = "0.3.0")]
#[command(about = "Turn YouTube captions into readable transcripts")]
#[command(long_about = "ytscribe fetches a video's caption track and renders it as a transcript.

EXAMPLES:
    ytscribe 'https://www.youtube.com/watch?v=dQw4w9WgXcQ'   # Structured transcript
    ytscribe -t 'https://youtu.be/dQw4w9WgXcQ'               # Sectioned, with timestamps
    ytscribe -f plain 'https://youtu.be/dQw4w9WgXcQ'         # Flat text
    ytscribe -l es 'https://youtu.be/dQw4w9WgXcQ'            # Spanish captions
    ytscribe info 'https://youtu.be/dQw4w9WgXcQ'             # Duration, segments, words
    ytscribe completions bash > ytscribe.bash                # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video URL to transcribe
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Caption language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Annotate output with timestamps
    #[arg(short = 't', long)]
    timestamps: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "structured")]
    format: CliOutputFormat,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
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

/// Load the configuration file, creating a default one if missing
fn load_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();
        config
            .save_to_file(config_path)
            .with_context(|| format!("Failed to create default config: {}", config_path))?;
        config
    };

    if let Some(cli_level) = log_level {
        config.log_level = cli_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level updates after loading the config
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytscribe", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Transcript(args)) => run_transcript(args).await,
        Some(Commands::Info(args)) => run_info(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli
                .url
                .ok_or_else(|| anyhow!("URL is required when no subcommand is specified"))?;

            let args = TranscriptArgs {
                url,
                language: cli.language,
                timestamps: cli.timestamps,
                format: cli.format,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_transcript(args).await
        }
    }
}

async fn run_transcript(args: TranscriptArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::with_config(config);

    let request = TranscriptRequest {
        url: args.url,
        language: args.language,
        include_timestamps: args.timestamps,
        format: args.format.into(),
    };

    let transcript = controller.get_transcript(&request).await?;

    println!("{}", transcript);
    Ok(())
}

async fn run_info(args: InfoArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.log_level)?;
    let controller = Controller::with_config(config);

    let info = controller.get_video_info(&args.url).await?;

    println!("{}", info);
    Ok(())
}
