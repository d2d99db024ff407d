#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use cricket_terminal::credentials::{Credentials, KeyStore};
use cricket_terminal::cricapi::{KeyCheck, MatchSource};
use cricket_terminal::model::Match;
use cricket_terminal::prompt::Prompter;

pub fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

pub fn with_status(name: &str, status: &str) -> Match {
    Match {
        name: name.to_string(),
        status: status.to_string(),
        venue: "Somewhere".to_string(),
        date_time_gmt: "2024-01-01T10:00:00".to_string(),
        teams: vec!["Home".to_string(), "Away".to_string()],
        ..Match::default()
    }
}

/// Replays canned answers and records every question asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub inputs: VecDeque<String>,
    pub confirms: VecDeque<bool>,
    pub selects: VecDeque<usize>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn confirm_count(&self) -> usize {
        self.asked.iter().filter(|q| q.starts_with("confirm:")).count()
    }

    pub fn input_count(&self) -> usize {
        self.asked.iter().filter(|q| q.starts_with("input:")).count()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        self.asked.push(format!("input:{message}"));
        self.inputs
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of inputs"))
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        self.asked.push(format!("confirm:{message}"));
        self.confirms
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of confirms"))
    }

    fn select(&mut self, message: &str, _choices: &[&str]) -> Result<usize> {
        self.asked.push(format!("select:{message}"));
        self.selects
            .pop_front()
            .ok_or_else(|| anyhow!("script ran out of selects"))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    pub saved: RefCell<Option<Credentials>>,
    pub save_calls: RefCell<usize>,
}

impl MemoryStore {
    pub fn with_key(key: &str) -> Self {
        Self {
            saved: RefCell::new(Some(Credentials {
                api_key: key.to_string(),
            })),
            save_calls: RefCell::new(0),
        }
    }
}

impl KeyStore for MemoryStore {
    fn load(&self) -> Result<Option<Credentials>> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, creds: &Credentials) -> Result<()> {
        *self.saved.borrow_mut() = Some(creds.clone());
        *self.save_calls.borrow_mut() += 1;
        Ok(())
    }
}

/// In-memory match source; `valid_keys` drives `check_key`.
#[derive(Default)]
pub struct FakeSource {
    pub current: Vec<Match>,
    pub all: Vec<Match>,
    pub valid_keys: Vec<String>,
    pub fail_checks: bool,
    pub checked: RefCell<Vec<String>>,
}

impl MatchSource for FakeSource {
    fn fetch_current(&self) -> Result<Vec<Match>> {
        Ok(self.current.clone())
    }

    fn fetch_upcoming(&self) -> Result<Vec<Match>> {
        Ok(self.all.clone())
    }

    fn check_key(&self, api_key: &str) -> Result<KeyCheck> {
        self.checked.borrow_mut().push(api_key.to_string());
        if self.fail_checks {
            return Err(anyhow!("connection refused"));
        }
        if self.valid_keys.iter().any(|k| k == api_key) {
            Ok(KeyCheck::Accepted)
        } else {
            Ok(KeyCheck::Invalid)
        }
    }
}
