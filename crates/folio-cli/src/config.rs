use crate::types::InputFormat;
use folio_engine::WindowConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result type for config operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Config file missing or malformed
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Where the config file comes from, by priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_CONFIG environment variable (with tilde expansion)
/// 3. `<config dir>/folio/config.toml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Default(PathBuf),
    None,
}

pub fn resolve_config_source(explicit_path: Option<&str>) -> ConfigSource {
    if let Some(path) = explicit_path {
        return ConfigSource::Explicit(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG")
        && !env_path.is_empty()
    {
        return ConfigSource::Explicit(expand_tilde(&env_path));
    }

    match dirs::config_dir() {
        Some(dir) => ConfigSource::Default(dir.join("folio").join("config.toml")),
        None => ConfigSource::None,
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default items per page; values below 1 behave as 1
    pub page_size: i64,
    pub input: InputFormat,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 20,
            input: InputFormat::Auto,
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Load from the resolved source. A missing file at the default location
    /// yields defaults; a missing explicit file is an error.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_source(explicit_path) {
            ConfigSource::Explicit(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_from(&path)
            }
            ConfigSource::Default(path) => Self::load_from(&path),
            ConfigSource::None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
