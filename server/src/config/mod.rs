//! Process configuration, loaded once at startup from the environment.

use crate::errors::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE: &str = "WarmPaws";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongo_uri: String,
    pub database: String,
}

impl Config {
    /// Reads `HOST`, `PORT`, `MONGO_URI` and `MONGO_DB`. Only `MONGO_URI`
    /// is required; the rest fall back to the defaults above.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let mongo_uri = std::env::var("MONGO_URI").map_err(|_| ConfigError::MissingRequired {
            field: "MONGO_URI".to_string(),
        })?;
        if mongo_uri.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "MONGO_URI".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        let database = std::env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

        Ok(Self {
            host,
            port,
            mongo_uri,
            database,
        })
    }
}
