//! Configuration discovery for the CLI.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among [`search_paths`] is used, and defaults apply when none exists.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use netdot::{NetdotError, config::AppConfig};

const LOCAL_CONFIG: &str = "netdot/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for NetdotError {
    fn from(err: ConfigError) -> Self {
        NetdotError::Io(io::Error::other(err.to_string()))
    }
}

/// Implicit configuration locations, in lookup order: the working
/// directory, then the platform config directory.
fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "netdot", "netdot") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

/// Load the configuration for one run.
///
/// # Errors
///
/// Returns an error if an explicit path does not exist, or if the chosen
/// file cannot be read or parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, NetdotError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return load_config_file(path);
    }

    let Some(path) = search_paths().into_iter().find(|path| path.exists()) else {
        debug!("No configuration file found, using default configuration");
        return Ok(AppConfig::default());
    };
    load_config_file(&path)
}

fn load_config_file(path: &Path) -> Result<AppConfig, NetdotError> {
    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(path)?;
    Ok(parse_config(path, &content)?)
}

fn parse_config(path: &Path, content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
