use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use crossterm::style::Stylize;

/// Interactive input surface. The terminal implementation reads stdin; tests
/// substitute a scripted one.
pub trait Prompter {
    fn input(&mut self, message: &str) -> Result<String>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
    /// Returns the zero-based index picked by the user. Out-of-range picks are
    /// returned as-is so the caller decides how to reject them.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize>;
}

pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed reading from stdin")?;
        if read == 0 {
            return Err(anyhow!("input closed"));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, message: &str, hint: &str) -> Result<String> {
        write!(self.writer, "{} {}{}", "?".green().bold(), message.bold(), hint)?;
        self.writer.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn input(&mut self, message: &str) -> Result<String> {
        self.ask(message, " ")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { " (Y/n) " } else { " (y/N) " };
        loop {
            let answer = self.ask(message, hint)?;
            match parse_yes_no(&answer) {
                Some(value) => return Ok(value),
                None if answer.trim().is_empty() => return Ok(default),
                None => writeln!(self.writer, "{}", "Please answer y or n.".yellow())?,
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        writeln!(self.writer, "{} {}", "?".green().bold(), message)?;
        for (idx, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", idx + 1, choice)?;
        }
        let answer = self.ask("Select", &format!(" [1-{}] ", choices.len()))?;
        // Anything unparseable maps past the end of the list.
        let picked = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .unwrap_or(choices.len());
        Ok(picked)
    }
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
