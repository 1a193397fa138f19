//! Reading and writing [`PhilomenaConfig`] as TOML.
//!
//! ## Config file
//! By default the config lives in `$XDG_CONFIG_HOME/booru-philomena/config.toml` on Linux or
//! `%APPDATA%/FerrahWolfeh/booru-philomena/config/config.toml` on Windows. Set the env var
//! `PHILOMENA_CONFIG_DIR` to point it somewhere else.
//!
//! A commented sample is written the first time the default file is requested.
use directories::ProjectDirs;
use log::debug;
use std::{
    env,
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::PhilomenaConfig;
use crate::error::ConfigError;

pub const CONFIG_DIR_ENV: &str = "PHILOMENA_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const SAMPLE_CONFIG_TOML: &str = include_str!("sample.toml");

impl PhilomenaConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::decode(contents, "<memory>")
    }

    /// Reads and validates the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read_to_string(path)?;
        let config = Self::decode(&contents, &path.display().to_string())?;
        config.validate()?;

        debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Like [`load`](Self::load), but writes the sample config to `path` first if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }

            debug!("Creating sample config at {}", path.display());
            File::create(path)?.write_all(SAMPLE_CONFIG_TOML.as_bytes())?;
        }

        Self::load(path)
    }

    fn decode(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::DecodeError {
            path: origin.to_string(),
            message: e.message().to_string(),
        })
    }
}

/// Returns the path of the default config file, honoring `PHILOMENA_CONFIG_DIR`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let dir = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "FerrahWolfeh", "booru-philomena")
            .ok_or(ConfigError::NoConfigDir)?
            .config_dir()
            .to_path_buf(),
    };

    Ok(dir.join(CONFIG_FILE_NAME))
}
