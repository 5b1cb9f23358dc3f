use anyhow::{anyhow, Result};
use std::time::Duration;

static API_BASE: &str = "https://api.opensea.io/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    /// Upper bound on time spent retrying transport failures.
    pub retry_max_elapsed: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            retry_max_elapsed: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Reads `OPENSEA_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(|key| dotenv::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let default = Self::default();
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_base: var("OPENSEA_API_BASE").unwrap_or(default.api_base),
            api_key: var("OPENSEA_API_KEY"),
            timeout: match var("OPENSEA_TIMEOUT_SECS") {
                Some(v) => secs("OPENSEA_TIMEOUT_SECS", &v)?,
                None => default.timeout,
            },
            retry_max_elapsed: match var("OPENSEA_RETRY_MAX_ELAPSED_SECS") {
                Some(v) => secs("OPENSEA_RETRY_MAX_ELAPSED_SECS", &v)?,
                None => default.retry_max_elapsed,
            },
        })
    }
}

fn secs(key: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| anyhow!("{} must be a whole number of seconds, got {:?}: {}", key, value, e))
}
