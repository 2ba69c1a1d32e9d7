/// Server configuration read from the environment.
///
/// | Variable            | Default                  |
/// |---------------------|--------------------------|
/// | `HOST`              | `127.0.0.1`              |
/// | `PORT`              | `8080`                   |
/// | `MEDIAVIEW_DATASET` | `data/movies_final.json` |

use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATASET: &str = "data/movies_final.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dataset: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dataset: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("HOST") {
            if host.trim().is_empty() {
                return Err(ConfigError::Empty { name: "HOST" });
            }
            config.host = host;
        }

        if let Some(port) = lookup("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value: port.clone(),
            })?;
        }

        if let Some(dataset) = lookup("MEDIAVIEW_DATASET") {
            if dataset.trim().is_empty() {
                return Err(ConfigError::Empty { name: "MEDIAVIEW_DATASET" });
            }
            config.dataset = PathBuf::from(dataset);
        }

        Ok(config)
    }
}
