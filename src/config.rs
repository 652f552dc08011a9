use anyhow::Context;

use crate::scoring::ReferenceSet;
use crate::swaps::DEFAULT_SUGGESTION_LIMIT;

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Reference table used when a request does not name one.
    pub default_reference: ReferenceSet,
    pub swap_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_reference: ReferenceSet::Meal,
            swap_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let default_reference = match std::env::var("SCORE_REFERENCE") {
            Ok(v) => v.parse::<ReferenceSet>()?,
            Err(_) => ReferenceSet::Meal,
        };
        let scoring = ScoringConfig {
            default_reference,
            swap_limit: std::env::var("SWAP_SUGGESTION_LIMIT")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(DEFAULT_SUGGESTION_LIMIT),
        };
        Ok(Self {
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
            scoring,
        })
    }
}
