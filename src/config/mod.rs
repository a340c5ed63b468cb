// src/config/mod.rs
// Env-driven configuration with .env support. The completion API key is
// deliberately not part of this struct; it is read once at provider
// construction (see llm::provider::openai) and never logged.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct SiftConfig {
    // ── Completion endpoint
    pub openai_base_url: String,
    pub model: String,
    pub openai_timeout: u64,

    // ── Server
    pub host: String,
    pub port: u16,

    // ── CORS
    pub cors_origin: String,

    // ── Logging
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            // Tolerate trailing comments and whitespace in .env values
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl SiftConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("No .env file found; using environment variables and defaults.");
        }

        Self {
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com".to_string()),
            model: env_var_or("SIFT_MODEL", "gpt-4".to_string()),
            openai_timeout: env_var_or("SIFT_OPENAI_TIMEOUT", 60),
            host: env_var_or("SIFT_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SIFT_PORT", 3002),
            cors_origin: env_var_or("SIFT_CORS_ORIGIN", "http://localhost:3000".to_string()),
            log_level: env_var_or("SIFT_LOG_LEVEL", "info".to_string()),
        }
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<SiftConfig> = Lazy::new(SiftConfig::from_env);
