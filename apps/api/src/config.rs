use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PLACEHOLDER_TOKEN: &str = "fake-jwt-token";

/// Application configuration loaded from environment variables.
/// Every setting has a default, so the service starts without a `.env`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Token handed out on successful login until a real issuer exists.
    pub placeholder_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", "0.0.0.0"),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            rust_log: env_or("RUST_LOG", "info"),
            placeholder_token: env_or("AUTH_PLACEHOLDER_TOKEN", DEFAULT_PLACEHOLDER_TOKEN),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            placeholder_token: DEFAULT_PLACEHOLDER_TOKEN.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{value}'")),
    }
}
