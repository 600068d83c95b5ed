use crate::server::error::config::ConfigError;

pub static DEFAULT_DATABASE_URL: &str = "sqlite://satellite.db?mode=rwc";
pub static DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
pub static DEFAULT_HOST: &str = "0.0.0.0";
pub static DEFAULT_PORT: u16 = 5002;

/// Server configuration read from the environment
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    /// Origins allowed to make cross-origin requests
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    /// Insert the default groups and satellites into empty tables on startup
    pub seed_defaults: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup, falling back to defaults
    /// for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        let seed_defaults = match lookup("SEED_DEFAULTS") {
            Some(value) => value.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "SEED_DEFAULTS".to_string(),
                reason: format!("{}", e),
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            cors_origins,
            host,
            port,
            seed_defaults,
        })
    }
}
