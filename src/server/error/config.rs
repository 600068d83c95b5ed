use thiserror::Error;

/// Startup configuration failure, reported before the listener is bound
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}
