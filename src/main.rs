use unihook::app::LandingApp;
use unihook::cli::Args;
use unihook::config;

use clap::Parser;
use eframe::egui;
use log::{debug, info};

fn main() -> eframe::Result<()> {
    // Parse command-line arguments first (needed for log setup)
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());

    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    if let Err(e) = unihook::shell::init_logging(&args, &path_config) {
        eprintln!("Warning: {:#}", e);
    }

    info!("UNIHOOK starting...");
    debug!("Command-line args: {:?}", args);

    let settings_path = config::config_file(config::SETTINGS_FILE, &path_config);
    info!("Config path: {}", settings_path.display());
    info!("Data path: {}", config::data_dir(&path_config).display());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("UNIHOOK v{} • F1 for help", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([480.0, 360.0])
            .with_resizable(true),
        persist_window: true,
        persistence_path: Some(settings_path),
        ..Default::default()
    };

    eframe::run_native(
        "UNIHOOK",
        native_options,
        Box::new(move |cc| Ok(Box::new(LandingApp::from_storage(cc.storage, &args, path_config)))),
    )
}
