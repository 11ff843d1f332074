use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_OPENCAGE_API_URL: &str = "https://api.opencagedata.com";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub gemini_model: String,
    /// Absent key means geolocation is reported as unsupported.
    pub opencage_api_key: Option<String>,
    pub opencage_api_url: String,
    /// Absent URL falls back to the in-process memory store.
    pub redis_url: Option<String>,
    /// Country named in the local-insights prompt.
    pub market_country: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_API_URL),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            opencage_api_key: optional_env("OPENCAGE_API_KEY"),
            opencage_api_url: env_or("OPENCAGE_API_URL", DEFAULT_OPENCAGE_API_URL),
            redis_url: optional_env("REDIS_URL"),
            market_country: env_or("MARKET_COUNTRY", "India"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
