//! Client configuration loaded from environment variables.
//!
//! Everything has a working default, so `from_env` never fails; a `.env`
//! file in the working directory is honored for local development.

use std::env;
use std::path::PathBuf;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the store API (no trailing slash).
    pub api_url: String,
    /// Path of the persisted-token file.
    pub token_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_url = env::var("FAVMARK_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

        let token_path = env::var("FAVMARK_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_path());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token_path,
        }
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_url: "http://127.0.0.1:3000".to_string(),
            token_path: PathBuf::from("favmark-test-token.json"),
        }
    }
}

/// `$HOME/.favmark/token.json`, falling back to the working directory when
/// HOME is unset.
fn default_token_path() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".favmark").join("token.json"),
        Err(_) => PathBuf::from(".favmark-token.json"),
    }
}
