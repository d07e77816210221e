use std::fs;
use std::path::{Path, PathBuf};

use super::core::ReadabilityConfig;
use crate::errors::{ReadabilityError, Result};

pub const CONFIG_FILE_NAME: &str = ".readability.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a configuration from TOML text
pub fn parse_config(contents: &str) -> std::result::Result<ReadabilityConfig, String> {
    toml::from_str::<ReadabilityConfig>(contents)
        .map_err(|e| format!("failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load a configuration file the user named explicitly. Missing or
/// malformed files are errors.
pub fn load_config_from(path: &Path) -> Result<ReadabilityConfig> {
    let contents = fs::read_to_string(path).map_err(|e| ReadabilityError::io(path, e))?;
    let config = parse_config(&contents).map_err(|msg| ReadabilityError::config(path, msg))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ReadabilityConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` followed by its ancestors, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.readability.toml` walking up from `start`.
pub fn discover_config(start: PathBuf) -> ReadabilityConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ReadabilityConfig::default()
        })
}

/// Load the explicit config if given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<ReadabilityConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(ReadabilityConfig::default())
        }
    }
}
