use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.cricapi.com/v1";
pub const DEFAULT_CONFIG_FILE: &str = "cricket-cli-config.json";
const DEFAULT_LIVE_POLL_SECS: u64 = 60;
const MIN_LIVE_POLL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub config_path: PathBuf,
    pub live_refresh: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            live_refresh: Duration::from_secs(DEFAULT_LIVE_POLL_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("CRICAPI_BASE_URL")
            .map(|val| val.trim().trim_end_matches('/').to_string())
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config_path = lookup("CRICKET_CLI_CONFIG")
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let live_secs = lookup("LIVE_POLL_SECS")
            .and_then(|val| val.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_LIVE_POLL_SECS)
            .max(MIN_LIVE_POLL_SECS);

        Self {
            base_url,
            config_path,
            live_refresh: Duration::from_secs(live_secs),
        }
    }
}
