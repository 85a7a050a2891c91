//! Shared startup for the main app and the standalone binary targets.
//!
//! Logger setup and the native window options every binary starts from.

use std::path::PathBuf;

use anyhow::{Context, Result};
use eframe::egui;
use log::LevelFilter;

use crate::cli::Args;
use crate::config::{self, PathConfig};

/// Map `-v` count to a level: 0 warn, 1 info, 2 debug, 3+ trace
pub fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize logging from CLI flags.
///
/// With `--log` everything goes to a file at the requested level; otherwise
/// to stderr, respecting `RUST_LOG`. Returns the log file path when logging
/// to a file.
pub fn init_logging(args: &Args, path_config: &PathConfig) -> Result<Option<PathBuf>> {
    let level = log_level(args.verbosity);

    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .clone()
            .unwrap_or_else(|| config::data_file(config::LOG_FILE, path_config));

        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(level)
            .filter_module("egui", LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("Logger already initialized")?;

        log::info!("Logging to file: {} (level: {:?})", log_path.display(), level);
        Ok(Some(log_path))
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
            .filter_module("egui", LevelFilter::Info)
            .format_timestamp_millis()
            .try_init()
            .context("Logger already initialized")?;
        Ok(None)
    }
}

/// Initialize logging for standalone binaries
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

/// Window options shared by all binaries.
pub fn native_options(title: &str, size: egui::Vec2) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size)
            .with_min_inner_size([480.0, 360.0])
            .with_resizable(true),
        ..Default::default()
    }
}
