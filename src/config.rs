
use std::env;
use std::path::{Path, PathBuf};

use home::home_dir;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use thiserror::Error;
use toml;

use crate::catalog::DEFAULT_BASE_URL;
use crate::state::ResponsePolicy;

/// Overrides `rawg.api_key` from the config file when set
pub const API_KEY_ENV: &str = "GAMEHUB_RAWG_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: could not determine home dir")]
    NoHomeDir,
    #[error("Failed to read config file {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub rawg: Rawg,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub state: State,
}

#[serde_inline_default]
#[derive(Deserialize, Debug)]
pub struct Rawg {
    #[serde(default)]
    pub api_key: String,
    #[serde_inline_default(DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct StorageConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
pub struct State {
    #[serde(default)]
    pub response_policy: ResponsePolicy,
}

fn app_dir() -> Result<PathBuf> {
    let mut d = home_dir().ok_or(ConfigError::NoHomeDir)?;
    d.push(".gamehub");
    Ok(d)
}

impl Config {
    /// Where favorites and the session are kept; `~/.gamehub/data` unless configured
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(app_dir()?.join("data")),
        }
    }
}

pub fn parse(raw: &str, env_api_key: Option<String>) -> Result<Config> {
    let mut conf: Config = toml::from_str(raw)?;
    if let Some(key) = env_api_key.filter(|k| !k.is_empty()) {
        conf.rawg.api_key = key;
    }
    Ok(conf)
}

/// Read the config from `path`, or from `~/.gamehub/config.toml` if no path is given
pub fn read<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let f = match path {
        Some(p) => p.as_ref().to_path_buf(),
        None => app_dir()?.join("config.toml"),
    };

    let raw = std::fs::read_to_string(&f).map_err(|e| ConfigError::Io(f.clone(), e))?;
    parse(&raw, env::var(API_KEY_ENV).ok())
}
