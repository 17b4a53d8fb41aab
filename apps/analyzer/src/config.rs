use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables. Every value
/// has a default; a malformed value is a startup error.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Lower bound of the scoring band (the empty-resume score).
    pub score_floor: u8,
    /// Upper bound of the scoring band.
    pub score_ceiling: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let score_floor = percentage_env("SCORE_FLOOR", 40)?;
        let score_ceiling = percentage_env("SCORE_CEILING", 95)?;
        if score_floor > score_ceiling || score_ceiling > 100 {
            anyhow::bail!(
                "SCORE_FLOOR/SCORE_CEILING must satisfy floor <= ceiling <= 100 \
                 (got {score_floor}/{score_ceiling})"
            );
        }

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            score_floor,
            score_ceiling,
        })
    }
}

fn percentage_env(key: &str, default: u8) -> Result<u8> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u8>()
            .with_context(|| format!("{key} must be an integer percentage, got '{value}'")),
        Err(_) => Ok(default),
    }
}
