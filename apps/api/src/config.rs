use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::matching::recommend::{DEFAULT_LIMIT, MAX_RECOMMENDATIONS};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Default number of jobs returned by the recommendation endpoints.
    pub recommendation_limit: usize,
    /// How many of the newest jobs are scored per recommendation request.
    pub recommendation_pool_size: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            recommendation_limit: parse_env("RECOMMENDATION_LIMIT", DEFAULT_LIMIT)?,
            recommendation_pool_size: parse_env("RECOMMENDATION_POOL_SIZE", 200)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that parse but would break every recommendation request.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.recommendation_limit <= MAX_RECOMMENDATIONS,
            "RECOMMENDATION_LIMIT must be at most {MAX_RECOMMENDATIONS}, got {}",
            self.recommendation_limit
        );
        ensure!(
            self.recommendation_pool_size >= 1,
            "RECOMMENDATION_POOL_SIZE must be at least 1, got {}",
            self.recommendation_pool_size
        );
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
