//! Demo API client - Main Entry Point
//!
//! Sends each configured message through a fresh demo client. With no
//! arguments that is `"foo"` followed by `"bar"`.

use clap::{Parser, Subcommand};
use demo_api_client::config::DemoConfig;
use demo_api_client::observability::{try_parse_level, LoggingSettings};
use demo_api_client::send_messages;
use std::path::PathBuf;
use std::process;
use tracing::error;

/// Demo API client
#[derive(Parser)]
#[command(name = "demo-api-client")]
#[command(about = "Drive the demo API client through one request per message")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, value_name = "LEVEL", env = "DEMO_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send messages (defaults to the configured list)
    Run {
        /// Messages to send, one request each
        messages: Vec<String>,
    },
    /// Validate configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    // Command line beats LOG_LEVEL, which beats the config file
    let cli_level = match cli.log_level.as_deref() {
        Some(raw) => match try_parse_level(raw) {
            Some(level) => {
                config.logging.level = level.to_string();
                Some(level)
            }
            None => {
                eprintln!("Invalid command line: unknown log level '{raw}'");
                process::exit(1);
            }
        },
        None => None,
    };

    if let Err(e) = LoggingSettings::resolve(&config.logging, cli_level).init() {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        None => run(&config.run.messages),
        Some(Commands::Run { messages }) if messages.is_empty() => run(&config.run.messages),
        Some(Commands::Run { messages }) => run(&messages),
        Some(Commands::Config { show }) => handle_config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<DemoConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => Ok(DemoConfig::load_from_file(path)?),
        None => {
            // Try default locations
            let default_paths = ["demo.toml", "config/demo.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    return Ok(DemoConfig::load_from_file(&path)?);
                }
            }

            Ok(DemoConfig::default())
        }
    }
}

fn run(messages: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    send_messages(messages)?;
    Ok(())
}

fn handle_config_command(config: &DemoConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    if show {
        println!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
