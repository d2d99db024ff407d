use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::style::Stylize;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cricapi::{KeyCheck, MatchSource};
use crate::prompt::Prompter;

pub const KEY_PROMPT: &str =
    "Enter your API key (Get your api key from - https://cricketdata.org):";
pub const INVALID_KEY_MESSAGE: &str = "Invalid API Key. Please enter a valid API Key.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "apiKey")]
    pub api_key: String,
}

/// Where the API key lives between runs.
pub trait KeyStore {
    /// `Ok(None)` means "no usable credentials", never a hard failure.
    fn load(&self) -> Result<Option<Credentials>>;
    fn save(&self, creds: &Credentials) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyStore for JsonFileStore {
    fn load(&self) -> Result<Option<Credentials>> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Ok(None);
        };
        let Ok(creds) = serde_json::from_str::<Credentials>(&raw) else {
            warn!("ignoring unreadable config at {}", self.path.display());
            return Ok(None);
        };
        if creds.api_key.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(creds))
    }

    fn save(&self, creds: &Credentials) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("create config dir {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(creds).context("serialize config")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).context("write config")?;
        fs::rename(&tmp, &self.path).context("swap config")?;
        info!("saved api key to {}", self.path.display());
        Ok(())
    }
}

/// Returns the stored key, or prompts until the remote API accepts one.
///
/// A stored key is trusted as-is; it is only validated on the prompt path, so
/// a revoked key surfaces later as a fetch failure.
pub fn load_or_prompt<W: Write>(
    store: &dyn KeyStore,
    source: &dyn MatchSource,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<String> {
    if let Some(creds) = store.load()? {
        return Ok(creds.api_key);
    }

    loop {
        let api_key = prompter.input(KEY_PROMPT)?.trim().to_string();
        let check = if api_key.is_empty() {
            KeyCheck::Invalid
        } else {
            source.check_key(&api_key)?
        };

        match check {
            KeyCheck::Accepted => {
                store.save(&Credentials {
                    api_key: api_key.clone(),
                })?;
                return Ok(api_key);
            }
            KeyCheck::Invalid => {
                warn!("api key rejected");
                writeln!(out, "{}", INVALID_KEY_MESSAGE.red().bold())?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("cricket-cli-config.json"));
        store
            .save(&Credentials {
                api_key: "X".to_string(),
            })
            .expect("save");
        let loaded = store.load().expect("load").expect("creds");
        assert_eq!(loaded.api_key, "X");
    }

    #[test]
    fn file_uses_api_key_field_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        let store = JsonFileStore::new(&path);
        store
            .save(&Credentials {
                api_key: "abc".to_string(),
            })
            .expect("save");
        let raw = fs::read_to_string(&path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(value["apiKey"], "abc");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn missing_or_garbled_file_is_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg.json");
        let store = JsonFileStore::new(&path);
        assert!(store.load().expect("load").is_none());

        fs::write(&path, "{not json").expect("write");
        assert!(store.load().expect("load").is_none());

        fs::write(&path, r#"{"apiKey": "  "}"#).expect("write");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("nested").join("cfg.json"));
        store
            .save(&Credentials {
                api_key: "k".to_string(),
            })
            .expect("save");
        assert!(store.path().exists());
    }
}
