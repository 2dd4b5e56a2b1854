use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:10000";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server listens on.
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// `DATABASE_URL` is required; `BIND_ADDRESS` falls back to `0.0.0.0:10000`.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}
