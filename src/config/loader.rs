use std::fs;
use std::path::{Path, PathBuf};

use super::core::AuroraConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".aurora-risk.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<AuroraConfig> {
    toml::from_str::<AuroraConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))
}

/// Load an explicitly requested configuration file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<AuroraConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try a discovered configuration path, logging problems instead of failing
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AuroraConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
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

// "Not found" is the normal case while walking up the tree
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries
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

/// Search `start` and its ancestors for a configuration file
pub fn discover_config(start: PathBuf) -> AuroraConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AuroraConfig::default()
        })
}

/// Load configuration by searching upward from the current directory
pub fn load_config() -> AuroraConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AuroraConfig::default()
        }
    }
}

/// Explicit path when given, discovery otherwise
pub fn resolve_config(explicit: Option<&Path>) -> Result<AuroraConfig> {
    match explicit {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}

/// Template written by `aurora-risk init`
pub fn default_config_template() -> &'static str {
    r#"# aurora-risk configuration

[output]
# terminal, json or markdown
default_format = "terminal"

[analysis]
# Extract features for batch images in parallel
parallel = true
# Worker threads, 0 = all cores
jobs = 0
"#
}
