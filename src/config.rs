use crate::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub platform: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "RIOT_API_KEY is set but empty".to_string(),
            ));
        }

        let platform = env::var("RIOT_PLATFORM").unwrap_or_else(|_| "eun1".to_string());

        Ok(Config { api_key, platform })
    }
}
