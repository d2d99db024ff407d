use anyhow::{Context, Result, anyhow};
use log::{debug, warn};

use crate::http_client::get_text;
use crate::model::{ApiResponse, Match};

const INVALID_KEY_REASON: &str = "Invalid API Key";

/// Outcome of validating a candidate API key against the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCheck {
    Accepted,
    Invalid,
}

/// Anything that can hand back CricAPI match sets.
pub trait MatchSource {
    /// `currentMatches`: live and recently finished fixtures.
    fn fetch_current(&self) -> Result<Vec<Match>>;
    /// `matches`: the full fixture list, including ones not yet started.
    fn fetch_upcoming(&self) -> Result<Vec<Match>>;
    fn check_key(&self, api_key: &str) -> Result<KeyCheck>;
}

#[derive(Debug, Clone)]
pub struct CricApi {
    base_url: String,
    api_key: String,
}

impl CricApi {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn with_key(&self, api_key: impl Into<String>) -> Self {
        Self::new(self.base_url.clone(), api_key)
    }

    fn endpoint_url(&self, endpoint: &str, api_key: &str) -> String {
        format!(
            "{}/{endpoint}?apikey={api_key}&offset=0",
            self.base_url.trim_end_matches('/')
        )
    }

    fn get(&self, endpoint: &str, api_key: &str) -> Result<String> {
        debug!("GET {}/{endpoint}?apikey=<redacted>&offset=0", self.base_url);
        let url = self.endpoint_url(endpoint, api_key);
        get_text(&url).with_context(|| format!("{endpoint} request failed"))
    }
}

impl MatchSource for CricApi {
    fn fetch_current(&self) -> Result<Vec<Match>> {
        let body = self.get("currentMatches", &self.api_key)?;
        parse_matches_json(&body)
    }

    fn fetch_upcoming(&self) -> Result<Vec<Match>> {
        let body = self.get("matches", &self.api_key)?;
        parse_matches_json(&body)
    }

    fn check_key(&self, api_key: &str) -> Result<KeyCheck> {
        let body = self.get("currentMatches", api_key)?;
        parse_key_check_json(&body)
    }
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<Match>> {
    let Some(resp) = parse_envelope(raw)? else {
        return Ok(Vec::new());
    };
    if resp.status == "failure" {
        let reason = resp.reason.unwrap_or_else(|| "unknown reason".to_string());
        warn!("cricapi returned failure: {reason}");
        return Err(anyhow!("cricapi failure: {reason}"));
    }
    Ok(resp.data.unwrap_or_default())
}

/// Only the service's explicit "Invalid API Key" failure rejects a key; any
/// other well-formed response (including other failure reasons) accepts it.
/// A blank or `null` body accepts nothing.
pub fn parse_key_check_json(raw: &str) -> Result<KeyCheck> {
    let Some(resp) = parse_envelope(raw)? else {
        return Err(anyhow!("empty key-check response"));
    };
    if resp.status == "failure" && resp.reason.as_deref() == Some(INVALID_KEY_REASON) {
        return Ok(KeyCheck::Invalid);
    }
    Ok(KeyCheck::Accepted)
}

fn parse_envelope(raw: &str) -> Result<Option<ApiResponse>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let resp = serde_json::from_str::<ApiResponse>(trimmed).context("invalid cricapi json")?;
    Ok(Some(resp))
}
