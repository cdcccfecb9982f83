//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.vitrine/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Premium membership: premium customers ship free.
    pub premium: Option<bool>,
    /// Path to a TOML catalog file; the built-in seed product is used when
    /// unset.
    pub catalog_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// The reference storefront treats its demo customer as a premium member.
pub const DEFAULT_PREMIUM: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub premium: bool,
    pub catalog_file: Option<String>,
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

/// Returns the path to `~/.vitrine/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".vitrine").join("config.toml"))
}

/// Load config from `~/.vitrine/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `VitrineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<VitrineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(VitrineConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(VitrineConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: VitrineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Vitrine Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# premium = true                     # Premium members ship free
# catalog_file = "catalog.toml"      # Absolute path, or relative to the
#                                    # working directory; built-in demo
#                                    # product when unset

# A catalog file looks like:
#
# [product]
# name = "Wool Socks"
# description = "A pair of warm, fuzzy socks."
# brand = "Alpine Mills"
# details = ["80% cotton", "20% polyester"]
#
# [[product.variants]]
# id = 2234
# color = "green"
# image = "assets/socks-green.png"
# quantity = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// `cli_premium` and `cli_catalog` come from CLI flags (None = not given).
pub fn resolve(
    config: &VitrineConfig,
    cli_premium: Option<bool>,
    cli_catalog: Option<&str>,
) -> ResolvedConfig {
    // Premium: CLI → env → config → default
    let premium = cli_premium
        .or_else(|| env_bool("VITRINE_PREMIUM"))
        .or(config.general.premium)
        .unwrap_or(DEFAULT_PREMIUM);

    // Catalog file: CLI → env → config → none (seed product)
    let catalog_file = cli_catalog
        .map(|s| s.to_string())
        .or_else(|| std::env::var("VITRINE_CATALOG").ok())
        .or_else(|| config.general.catalog_file.clone());

    ResolvedConfig {
        premium,
        catalog_file,
    }
}

/// Parse a boolean env var; unset or unparseable counts as not given.
fn env_bool(name: &str) -> Option<bool> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {name}={raw}: expected true or false");
            None
        }
    }
}
