use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::weights::MatchWeights;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or an override is invalid.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub match_weights: MatchWeights,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: optional_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_weights: match_weights_from_env()?,
        })
    }
}

fn match_weights_from_env() -> Result<MatchWeights> {
    let defaults = MatchWeights::default();
    let weights = MatchWeights {
        skills: optional_env("MATCH_WEIGHT_SKILLS", defaults.skills)?,
        job_type: optional_env("MATCH_WEIGHT_JOB_TYPE", defaults.job_type)?,
        work_mode: optional_env("MATCH_WEIGHT_WORK_MODE", defaults.work_mode)?,
        location: optional_env("MATCH_WEIGHT_LOCATION", defaults.location)?,
        experience: optional_env("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
        intermediate_min_years: optional_env(
            "MATCH_INTERMEDIATE_MIN_YEARS",
            defaults.intermediate_min_years,
        )?,
        senior_min_years: optional_env("MATCH_SENIOR_MIN_YEARS", defaults.senior_min_years)?,
    };
    weights.validate().context("Invalid match weight configuration")?;
    Ok(weights)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
