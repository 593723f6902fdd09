//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.xtoolbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct XToolBoxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub download_dir: Option<String>,
    pub check_updates: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NetworkConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub github_api_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const RELEASE_REPO: &str = "nyxiereal/XToolBox";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub download_dir: PathBuf,
    pub check_updates: bool,
    pub log_level: LevelFilter,
    pub user_agent: String,
    pub timeout: Duration,
    pub github_api_url: String,
    pub release_repo: String,
}

/// Settings that only come from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub skip_update_check: bool,
    pub download_dir: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.xtoolbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".xtoolbox").join("config.toml"))
}

/// Load config from `~/.xtoolbox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `XToolBoxConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<XToolBoxConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(XToolBoxConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<XToolBoxConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(XToolBoxConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: XToolBoxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r#"# XToolBox Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# download_dir = "."                 # Or set XTOOLBOX_DOWNLOAD_DIR
# check_updates = true               # Ask GitHub for a newer release on startup
# log_level = "info"                 # "error", "warn", "info", "debug", "trace"

# [network]
# user_agent = "Mozilla/5.0"
# timeout_secs = 60                  # Max seconds to connect or wait between reads
# github_api_url = "https://api.github.com"   # Or set XTOOLBOX_GITHUB_API
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &XToolBoxConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Download dir: CLI → env → config → current directory
    let download_dir = cli
        .download_dir
        .clone()
        .or_else(|| std::env::var("XTOOLBOX_DOWNLOAD_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.download_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    let check_updates = !cli.skip_update_check && config.general.check_updates.unwrap_or(true);

    // Log level: env → config → info
    let log_level = std::env::var("XTOOLBOX_LOG_LEVEL")
        .ok()
        .and_then(|l| parse_level(&l))
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(LevelFilter::Info);

    // GitHub API: env → config → default
    let github_api_url = std::env::var("XTOOLBOX_GITHUB_API")
        .ok()
        .or_else(|| config.network.github_api_url.clone())
        .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string());

    ResolvedConfig {
        download_dir,
        check_updates,
        log_level,
        user_agent: config
            .network
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        timeout: Duration::from_secs(
            config.network.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
        github_api_url: github_api_url.trim_end_matches('/').to_string(),
        release_repo: RELEASE_REPO.to_string(),
    }
}
