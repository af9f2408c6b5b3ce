//! CLI configuration.
//!
//! Settings load from `./lineup.toml` or, failing that,
//! `~/.config/lineup/lineup.toml`. Every file field is optional and
//! overlays built-in defaults; command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::registry;

pub const CONFIG_FILE_NAME: &str = "lineup.toml";

const DEFAULT_MIN_QUERY_LENGTH: usize = 2;
const DEFAULT_MAX_RESULTS: usize = 10;
const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 15;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub display: DisplayConfig,
    pub search: SearchConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub color: bool,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Queries shorter than this behave as "no results".
    pub min_query_length: usize,
    /// Cap on fetched/filtered results shown per query.
    pub max_results: usize,
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig { color: true },
            search: SearchConfig {
                min_query_length: DEFAULT_MIN_QUERY_LENGTH,
                max_results: DEFAULT_MAX_RESULTS,
            },
            registry: RegistryConfig {
                base_url: registry::DEFAULT_BASE_URL.to_string(),
                timeout_secs: DEFAULT_REGISTRY_TIMEOUT_SECS,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// On-disk shape
// ---------------------------------------------------------------------------

/// Raw file contents; all fields optional so partial files overlay defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    display: Option<FileDisplay>,
    search: Option<FileSearch>,
    registry: Option<FileRegistry>,
}

#[derive(Debug, Default, Deserialize)]
struct FileDisplay {
    color: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSearch {
    min_query_length: Option<usize>,
    max_results: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct FileRegistry {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from --config); an
/// unreadable explicit path is an error, while missing default-location
/// files silently fall back to defaults.
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        dirs::config_dir,
    )
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let text = match path_override {
        Some(path) => Some(read_file(Path::new(path))?),
        None => default_config_paths(config_root)
            .into_iter()
            .find_map(|path| read_file(&path).ok()),
    };

    let parsed: FileConfig = match text {
        Some(text) => toml::from_str(&text)?,
        None => FileConfig::default(),
    };
    resolve(parsed)
}

fn default_config_paths<FRoot>(config_root: FRoot) -> Vec<PathBuf>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(root) = config_root() {
        paths.push(root.join("lineup").join(CONFIG_FILE_NAME));
    }
    paths
}

fn resolve(file: FileConfig) -> Result<Config, ConfigError> {
    let mut config = Config::default();

    if let Some(display) = file.display {
        if let Some(color) = display.color {
            config.display.color = color;
        }
    }
    if let Some(search) = file.search {
        if let Some(min) = search.min_query_length {
            config.search.min_query_length = min;
        }
        if let Some(max) = search.max_results {
            config.search.max_results = max;
        }
    }
    if let Some(reg) = file.registry {
        if let Some(base_url) = reg.base_url {
            config.registry.base_url = base_url;
        }
        if let Some(timeout) = reg.timeout_secs {
            config.registry.timeout_secs = timeout;
        }
    }

    if config.search.max_results == 0 {
        return Err(ConfigError::Invalid(
            "search.max_results must be at least 1".to_string(),
        ));
    }
    if config.registry.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "registry.timeout_secs must be at least 1".to_string(),
        ));
    }
    Ok(config)
}
