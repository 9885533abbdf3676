use anyhow::{Context, Result};

/// Client configuration loaded from environment variables.
/// Nothing here is required; a missing base URL surfaces later as a transport failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub clipboard_command: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: optional_env("TAILOR_API_BASE_URL")?.unwrap_or_default(),
            clipboard_command: optional_env("CLIPBOARD_COMMAND")?
                .filter(|cmd| !cmd.trim().is_empty()),
            rust_log: optional_env("RUST_LOG")?.unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Environment variable '{key}' is not valid unicode"))
        }
    }
}
