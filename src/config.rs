use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub bind_addr: String,
    /// `None` keeps uploads unbounded.
    pub max_upload_bytes: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set in .env file")?;

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let max_tokens = parse_var("OPENAI_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);
        let timeout_secs = parse_var("OPENAI_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES")?;

        Ok(Self {
            api_key,
            model,
            base_url,
            max_tokens,
            timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            max_upload_bytes,
        })
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .with_context(|| format!("{} has an invalid value: '{}'", name, raw))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        api_key: "test_key".to_string(),
        model: "test_model".to_string(),
        base_url: base_url.to_string(),
        max_tokens: DEFAULT_MAX_TOKENS,
        timeout: Duration::from_secs(5),
        bind_addr: DEFAULT_BIND_ADDR.to_string(),
        max_upload_bytes: None,
    }
}
