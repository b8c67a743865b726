use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::analyzer::SchemaMode;

/// Environment variables that must be present for the service to start.
/// The first name is preferred; the rest are accepted as fallbacks.
pub const REQUIRED_ENV: &[&[&str]] = &[&["GOOGLE_GENAI_API_KEY", "GOOGLE_API_KEY"]];

const DEFAULT_BACKEND_URL: &str = "https://18.232.134.110";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Service configuration loaded from environment variables.
/// Built once in `main`, then shared read-only through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_api_base: String,
    pub gemini_model: String,
    /// Backend that owns room metadata and receives analysis results.
    pub backend_url: String,
    pub backend_accept_invalid_certs: bool,
    pub prompt_template_path: PathBuf,
    pub transcript_dir: PathBuf,
    pub schema_mode: SchemaMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_any_env(REQUIRED_ENV[0])?,
            gemini_api_base: env_or("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            backend_url: env_or("BACKEND_URL", DEFAULT_BACKEND_URL)
                .trim_end_matches('/')
                .to_string(),
            backend_accept_invalid_certs: parse_bool(&env_or(
                "BACKEND_ACCEPT_INVALID_CERTS",
                "false",
            ))
            .context("BACKEND_ACCEPT_INVALID_CERTS must be true or false")?,
            prompt_template_path: PathBuf::from(env_or("PROMPT_TEMPLATE_PATH", "prompt.txt")),
            transcript_dir: PathBuf::from(env_or("TRANSCRIPT_DIR", "./tmp")),
            schema_mode: env_or("ANALYSIS_SCHEMA_MODE", "lenient")
                .parse::<SchemaMode>()
                .map_err(|e| {
                    anyhow::anyhow!("ANALYSIS_SCHEMA_MODE must be 'lenient' or 'strict': {e}")
                })?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the value of the first variable in `keys` that is set and non-empty.
pub fn require_any_env(keys: &[&str]) -> Result<String> {
    keys.iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .with_context(|| {
            format!(
                "Required environment variable '{}' is not set",
                keys.join("' or '")
            )
        })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}
