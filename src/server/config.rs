use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::auth::TokenDigest,
};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DATABASE_URL: &str = "sqlite://portfolio.db?mode=rwc";
const DEFAULT_LOG_FILE: &str = "log.txt";

pub struct Config {
    pub port: u16,
    pub database_url: String,

    /// SHA-256 digest the `token` field of mutating requests must hash to.
    pub token_digest: TokenDigest,

    pub log_file: PathBuf,
    /// Drop every table and re-run migrations on startup.
    pub reset_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(AppError::ConfigErr)` - Missing digest, or an unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: value.clone(),
                reason: "expected a port number".to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let digest = lookup("AUTH_TOKEN_SHA256")
            .ok_or_else(|| ConfigError::MissingEnvVar("AUTH_TOKEN_SHA256".to_string()))?;

        let reset_database = match lookup("RESET_DATABASE") {
            Some(value) => parse_flag("RESET_DATABASE", &value)?,
            None => false,
        };

        Ok(Self {
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            token_digest: TokenDigest::from_hex("AUTH_TOKEN_SHA256", &digest)?,
            log_file: lookup("LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            reset_database,
        })
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
