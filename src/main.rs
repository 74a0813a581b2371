#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use canifly_core::logging::LoggingBuilder;
use canifly_core::AppConfig;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global configuration, set from command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the configuration (set from command line or default)
pub fn get_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// CanIFly - account, character and skill plan dashboard
#[derive(Parser, Debug)]
#[command(name = "canifly-desktop")]
#[command(about = "CanIFly - account, character and skill plan dashboard")]
struct Args {
    /// JSON payload to load at startup
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Directory for JSONL session logs
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    /// Log filter directive (e.g. "canifly=debug"), overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,

    /// Log to the console only
    #[arg(long)]
    no_file_log: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::default()
        .with_data_file(args.data_file)
        .with_logs_dir(args.logs_dir)
        .with_log_filter(args.log_filter);

    let mut logging = if args.no_file_log {
        LoggingBuilder::console_only()
    } else {
        LoggingBuilder::new(&config.logs_dir, "desktop")
    };
    if let Some(filter) = &config.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    let log_path = logging.init().context("failed to initialize logging")?;

    tracing::info!(
        data_file = ?config.data_file,
        log_file = ?log_path,
        "Starting CanIFly"
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CanIFly")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    // Store configuration globally
    let _ = CONFIG.set(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
