//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.lifeline/config.toml` (or `$LIFELINE_HOME/config.toml`).
//! If missing on first run, a commented-out default is generated so users
//! can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::text::CANONICAL_LANGUAGE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LifelineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_language: Option<String>,
    pub fallback_language: Option<String>,
    pub content_file: Option<String>,
    pub strict_content: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageEntry {
    pub key: String,
    pub label: String,
}

impl LanguageEntry {
    fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORE_FILE: &str = "store.json";
pub const DEFAULT_EXPORT_FILE: &str = "copied.txt";
pub const LOG_FILE: &str = "lifeline.log";

const HOME_ENV: &str = "LIFELINE_HOME";
const LANGUAGE_ENV: &str = "LIFELINE_LANGUAGE";
const CONTENT_ENV: &str = "LIFELINE_CONTENT";

/// Languages offered in the picker when the config lists none.
pub fn default_languages() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new("javascript", "JavaScript"),
        LanguageEntry::new("java", "Java"),
        LanguageEntry::new("csharp", "C#"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_language: String,
    /// Set by env or CLI; applied after the persisted language is restored.
    pub forced_language: Option<String>,
    pub fallback_language: String,
    /// `None` means the built-in tree.
    pub content_path: Option<PathBuf>,
    pub strict_content: bool,
    pub store_path: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub languages: Vec<LanguageEntry>,
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

/// Returns `$LIFELINE_HOME`, or `~/.lifeline` when unset.
pub fn data_dir() -> Option<PathBuf> {
    match std::env::var_os(HOME_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|h| h.join(".lifeline")),
    }
}

/// Returns the path to `config.toml` in the data directory.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from the data directory.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LifelineConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LifelineConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LifelineConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LifelineConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LifelineConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LifelineConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Lifeline Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_language = "javascript"    # Or set LIFELINE_LANGUAGE / --language
# fallback_language = "javascript"   # Tried when a text lacks the active language
# content_file = "tree.json"         # Relative to this directory; omit for the built-in tree
# strict_content = false             # Refuse to start when the tree has issues

# [storage]
# file = "store.json"

# [export]
# file = "copied.txt"                # Where "copy" writes the advice text

# [[languages]]
# key = "javascript"
# label = "JavaScript"

# [[languages]]
# key = "python"
# label = "Python"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_language` and `cli_content` are from CLI flags (None = not specified).
pub fn resolve(
    config: &LifelineConfig,
    cli_language: Option<&str>,
    cli_content: Option<&Path>,
) -> ResolvedConfig {
    resolve_with(config, cli_language, cli_content, data_dir(), |key| {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    })
}

/// Same as [`resolve`] with the data directory and environment supplied by
/// the caller.
pub fn resolve_with(
    config: &LifelineConfig,
    cli_language: Option<&str>,
    cli_content: Option<&Path>,
    data_dir: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Forced language: CLI → env
    let forced_language = cli_language.map(|s| s.to_string()).or_else(|| env(LANGUAGE_ENV));

    let default_language = config
        .general
        .default_language
        .clone()
        .unwrap_or_else(|| CANONICAL_LANGUAGE.to_string());

    let fallback_language = config
        .general
        .fallback_language
        .clone()
        .unwrap_or_else(|| CANONICAL_LANGUAGE.to_string());

    // Content: CLI → env → config (relative to the data dir) → built-in
    let content_path = cli_content
        .map(Path::to_path_buf)
        .or_else(|| env(CONTENT_ENV).map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .content_file
                .as_ref()
                .map(|file| in_dir(data_dir.as_deref(), file))
        });

    let store_file = config.storage.file.as_deref().unwrap_or(DEFAULT_STORE_FILE);
    let export_file = config.export.file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE);

    let languages = if config.languages.is_empty() {
        default_languages()
    } else {
        config.languages.clone()
    };

    ResolvedConfig {
        store_path: data_dir.as_ref().map(|d| d.join(store_file)),
        export_path: data_dir.as_ref().map(|d| d.join(export_file)),
        log_path: data_dir.as_ref().map(|d| d.join(LOG_FILE)),
        default_language,
        forced_language,
        fallback_language,
        content_path,
        strict_content: config.general.strict_content.unwrap_or(false),
        languages,
    }
}

/// Absolute paths are kept; relative ones are taken from the data dir.
fn in_dir(dir: Option<&Path>, file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    match dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}
