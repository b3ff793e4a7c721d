use scoreboard::{background, commands, config, data_provider, toggles::ToggleStore, tui};
use scoreboard::{SharedData, SharedDataHandle};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Channel Constants
/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Hockey scoreboard for the terminal", long_about = "Hockey scoreboard for the terminal\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve the built-in fixture games instead of the configured feed
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every game card once
    Scores {
        /// Read the scores feed from this JSON file instead of the configured source
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print each display mode of a game card, using built-in games
    Gallery,
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };
    let state_path = config::get_state_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Unable to determine state path".to_string());

    let optional = |value: Option<String>| value.unwrap_or_else(|| "(not set)".to_string());

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!("Toggle State File: {}", state_path);
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("feed_url: {}", optional(cfg.feed_url.clone()));
    println!("feed_file: {}", optional(cfg.feed_file.as_ref().map(|p| p.display().to_string())));
    println!("time_format: {}", cfg.time_format);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[playback]");
    println!("enabled: {}", cfg.playback.enabled);
    println!("tick_millis: {}", cfg.playback.tick_millis);
    println!("step_seconds: {}", cfg.playback.step_seconds);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("highlight_fg: {:?}", cfg.theme.highlight_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Feed used by the interactive mode
fn feed_source(cli: &Cli, config: &config::Config) -> anyhow::Result<Box<dyn data_provider::FeedSource>> {
    #[cfg(feature = "development")]
    if cli.mock {
        tracing::info!("Using fixture games (--mock)");
        return Ok(Box::new(scoreboard::dev::mock_feed()));
    }
    #[cfg(not(feature = "development"))]
    let _ = cli;

    Ok(data_provider::from_config(config, None)?)
}

/// Run TUI mode with background data fetching
async fn run_tui_mode(source: Box<dyn data_provider::FeedSource>, config: config::Config) -> Result<(), std::io::Error> {
    let shared_data: SharedDataHandle = Arc::new(RwLock::new(SharedData::default()));

    // Create channel for manual refresh triggers
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);

    // Spawn background task to fetch data
    let shared_data_clone = Arc::clone(&shared_data);
    let refresh_interval = config.refresh_interval as u64;
    tokio::spawn(async move {
        background::fetch_data_loop(source, shared_data_clone, refresh_interval, refresh_rx).await;
    });

    let toggles = ToggleStore::load(config::get_state_path());
    tui::run(shared_data, refresh_tx, config, toggles).await
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(config: &config::Config, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Scores { file } => commands::scores::run(config, file).await,
        Commands::Gallery => commands::gallery::run(config),
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let mut cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let Some(command) = cli.command.take() else {
        // No subcommand: run TUI
        let source = match feed_source(&cli, &config) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = run_tui_mode(source, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle Config command separately (doesn't need a feed)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(&config, command).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
