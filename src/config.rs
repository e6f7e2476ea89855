use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_path: PathBuf,
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    /// DATA_PATH defaults to "oppskrift.redb".
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path: PathBuf = std::env::var("DATA_PATH")
            .unwrap_or_else(|_| "oppskrift.redb".to_string())
            .into();

        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("LISTEN_ADDR", "must be a valid socket address"))?;

        // "1" is the placeholder key shipped in example configs; treat it
        // as no credential so the fixture source gets selected.
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != "1");

        Ok(Config {
            listen_addr,
            data_path,
            api_key,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}
