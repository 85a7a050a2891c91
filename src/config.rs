use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Application directory name under platform config/data roots
const APP_DIR: &str = "unihook";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "UNIHOOK_CONFIG_DIR";

/// Settings file name
pub const SETTINGS_FILE: &str = "unihook.json";

/// Default log file name
pub const LOG_FILE: &str = "unihook.log";

/// Files whose presence in the working directory makes it the config dir
const LOCAL_MARKERS: [&str; 2] = [SETTINGS_FILE, LOG_FILE];

/// Configuration for overriding default application paths
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Custom config directory (from CLI or ENV)
    pub config_dir: Option<PathBuf>,
}

impl PathConfig {
    /// Create PathConfig from CLI arguments and environment variables
    ///
    /// Priority: CLI args → ENV var (UNIHOOK_CONFIG_DIR) → None (use defaults)
    pub fn from_env_and_cli(cli_dir: Option<PathBuf>) -> Self {
        Self::from_sources(cli_dir, std::env::var(CONFIG_DIR_ENV).ok())
    }

    fn from_sources(cli_dir: Option<PathBuf>, env_dir: Option<String>) -> Self {
        let config_dir = cli_dir.or_else(|| env_dir.filter(|s| !s.trim().is_empty()).map(PathBuf::from));
        Self { config_dir }
    }
}

/// Get path to a configuration file
///
/// Priority:
/// 1. CLI --config-dir argument
/// 2. UNIHOOK_CONFIG_DIR environment variable
/// 3. Local folder IF unihook.json or unihook.log exist there
/// 4. Platform-specific config directory from dirs-next (default)
///
/// Platform paths:
/// - Linux: ~/.config/unihook/{name}
/// - macOS: ~/Library/Application Support/unihook/{name}
/// - Windows: %APPDATA%\unihook\{name}
pub fn config_file(name: &str, config: &PathConfig) -> PathBuf {
    config_dir(config).join(name)
}

/// Get path to a data file (logs)
///
/// Same priority as [`config_file`], with the platform data directory as the
/// default (~/.local/share/unihook on Linux).
pub fn data_file(name: &str, config: &PathConfig) -> PathBuf {
    data_dir(config).join(name)
}

/// Ensure that configuration and data directories exist
pub fn ensure_dirs(config: &PathConfig) -> Result<()> {
    let config_dir = config_dir(config);
    let data_dir = data_dir(config);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;
    }

    // Only create data_dir if it's different from config_dir
    if data_dir != config_dir && !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    }

    Ok(())
}

pub fn config_dir(config: &PathConfig) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    resolve_dir(config, cwd.as_deref(), dirs_next::config_dir())
}

pub fn data_dir(config: &PathConfig) -> PathBuf {
    let cwd = std::env::current_dir().ok();
    resolve_dir(config, cwd.as_deref(), dirs_next::data_dir())
}

/// Check if any config files exist in the given directory
fn has_local_config_files(dir: &Path) -> bool {
    LOCAL_MARKERS.iter().any(|f| dir.join(f).exists())
}

fn resolve_dir(config: &PathConfig, cwd: Option<&Path>, platform_root: Option<PathBuf>) -> PathBuf {
    // Priority 1: Custom directory from CLI or ENV
    if let Some(dir) = &config.config_dir {
        return dir.clone();
    }

    // Priority 2: Local folder IF config files exist there
    if let Some(cwd) = cwd
        && has_local_config_files(cwd)
    {
        return cwd.to_path_buf();
    }

    // Priority 3: Platform-specific directory
    if let Some(root) = platform_root {
        return root.join(APP_DIR);
    }

    // Fallback: "." if everything else fails
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unihook_test_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_config_file_with_custom_dir() {
        let config = PathConfig {
            config_dir: Some(PathBuf::from("/custom")),
        };

        assert_eq!(config_file("test.json", &config), PathBuf::from("/custom/test.json"));
        assert_eq!(data_file("unihook.log", &config), PathBuf::from("/custom/unihook.log"));
    }

    #[test]
    fn test_cli_dir_beats_env() {
        let config = PathConfig::from_sources(Some(PathBuf::from("/cli")), Some("/env".into()));
        assert_eq!(config.config_dir, Some(PathBuf::from("/cli")));

        let config = PathConfig::from_sources(None, Some("/env".into()));
        assert_eq!(config.config_dir, Some(PathBuf::from("/env")));

        let config = PathConfig::from_sources(None, Some("  ".into()));
        assert_eq!(config.config_dir, None);
    }

    #[test]
    fn test_platform_default() {
        let config = PathConfig::default();
        let dir = resolve_dir(&config, None, Some(PathBuf::from("/platform")));
        assert_eq!(dir, PathBuf::from("/platform/unihook"));

        assert_eq!(resolve_dir(&config, None, None), PathBuf::from("."));
    }

    #[test]
    fn test_local_files_priority() {
        let cwd = temp_dir("local");
        let config = PathConfig::default();
        let platform = Some(PathBuf::from("/platform"));

        // No local files - platform default
        let without = resolve_dir(&config, Some(&cwd), platform.clone());
        assert_eq!(without, PathBuf::from("/platform/unihook"));

        // A local settings file makes the working directory win
        std::fs::write(cwd.join(SETTINGS_FILE), "{}").unwrap();
        assert_eq!(resolve_dir(&config, Some(&cwd), platform.clone()), cwd);

        // Explicit directory still beats local files
        let custom = PathConfig { config_dir: Some(PathBuf::from("/custom")) };
        assert_eq!(resolve_dir(&custom, Some(&cwd), platform), PathBuf::from("/custom"));

        let _ = std::fs::remove_dir_all(&cwd);
    }

    #[test]
    fn test_ensure_dirs_creates_custom_dir() {
        let root = temp_dir("ensure");
        let dir = root.join("nested").join("config");
        let config = PathConfig { config_dir: Some(dir.clone()) };

        ensure_dirs(&config).unwrap();
        assert!(dir.is_dir());
        // Idempotent
        ensure_dirs(&config).unwrap();

        let _ = std::fs::remove_dir_all(&root);
    }
}
