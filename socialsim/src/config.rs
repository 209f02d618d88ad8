use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{SocialError, SocialResult};

/// Default configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "socialsim.toml";
/// Environment variable overriding `store.data_dir`.
pub const DATA_DIR_ENV: &str = "SOCIALSIM_DATA_DIR";

/// Configuration stored in socialsim.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub redis: RedisSettings,
}

/// Which backend holds the collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    File,
    Memory,
    Redis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisSettings {
    #[serde(default = "default_redis_url")]
    pub url: String,
    #[serde(default = "default_redis_prefix")]
    pub prefix: String,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            prefix: default_redis_prefix(),
        }
    }
}

fn default_redis_url() -> String {
    "${REDIS_URL}".to_string()
}

fn default_redis_prefix() -> String {
    "socialsim".to_string()
}

impl StoreConfig {
    /// Resolves configuration from an explicit path, else `socialsim.toml` in the
    /// working directory, else defaults. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> SocialResult<Self> {
        let config = match explicit {
            Some(path) => Self::from_path(path)?,
            None => {
                let local = Path::new(CONFIG_FILE_NAME);
                if local.exists() {
                    Self::from_path(local)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.with_env_overrides())
    }

    pub fn from_path(path: &Path) -> SocialResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| SocialError::config(format!("{}: {source}", path.display())))?;
        Self::from_toml_str(&content)
            .map_err(|err| SocialError::config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml_str(content: &str) -> SocialResult<Self> {
        toml::from_str(content).map_err(|err| SocialError::config(err.to_string()))
    }

    /// Applies `SOCIALSIM_DATA_DIR` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(data_dir) = std::env::var(DATA_DIR_ENV)
            && !data_dir.trim().is_empty()
        {
            self.store.data_dir = data_dir;
        }
        self
    }

    /// Data directory with `${VAR}` references expanded.
    pub fn data_dir(&self) -> SocialResult<PathBuf> {
        expand_env(&self.store.data_dir).map(PathBuf::from)
    }

    /// Get the Redis URL, expanding environment variables
    pub fn redis_url(&self) -> SocialResult<String> {
        expand_env(&self.redis.url)
    }
}

fn expand_env(value: &str) -> SocialResult<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name)
            .map_err(|_| SocialError::config(format!("environment variable {var_name} not set")))
    } else {
        Ok(value.to_string())
    }
}
