use anyhow::{Context, Result};

pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Application configuration loaded from environment variables.
///
/// Upstream credentials are optional here: a missing DeepSeek key or Pushover
/// pair is reported by the endpoint that needs it, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub secret_key: String,
    pub debug: bool,
    pub port: u16,
    /// Base URL of the portfolio frontend, without a trailing slash.
    pub frontend_url: String,
    pub deepseek_api_key: Option<String>,
    pub deepseek_base_url: String,
    pub pushover_token: Option<String>,
    pub pushover_user: Option<String>,
    pub pushover_api_url: String,
    pub persona_name: String,
    pub resume_path: String,
    pub linkedin_path: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let debug = var("APP_ENV")
            .or_else(|| var("FLASK_ENV"))
            .is_some_and(|env| env == "development");

        Ok(Config {
            secret_key: var_or("SECRET_KEY", DEFAULT_SECRET_KEY),
            debug,
            port: var_or("PORT", "5001")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            frontend_url: normalize_base_url(&var_or("FRONTEND_URL", "http://localhost:5173")),
            deepseek_api_key: var("DEEPSEEK_API_KEY"),
            deepseek_base_url: var_or("DEEPSEEK_BASE_URL", "https://api.deepseek.com/v1"),
            pushover_token: var("PUSHOVER_TOKEN"),
            pushover_user: var("PUSHOVER_USER"),
            pushover_api_url: var_or(
                "PUSHOVER_API_URL",
                "https://api.pushover.net/1/messages.json",
            ),
            persona_name: var_or("PERSONA_NAME", "Eddie Khanna"),
            resume_path: var_or("RESUME_PATH", "me/resume.txt"),
            linkedin_path: var("LINKEDIN_PATH"),
            rust_log: var_or("RUST_LOG", if debug { "debug" } else { "info" }),
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

/// Strips every trailing `/` so that `{base}/about` never produces `//about`.
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
