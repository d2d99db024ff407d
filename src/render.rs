use std::io::{self, Write};

use chrono::{DateTime, Local, Timelike};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::model::{Match, Score};

/// Which paginated listing a block is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Ongoing,
    Upcoming,
    Recent,
}

impl ListView {
    pub fn header(self) -> &'static str {
        match self {
            ListView::Ongoing => "Ongoing Matches:",
            ListView::Upcoming => "Upcoming Matches:",
            ListView::Recent => "Recent Matches:",
        }
    }

    pub fn next_page_prompt(self) -> &'static str {
        match self {
            ListView::Recent => "Show next 3 recent matches?",
            ListView::Ongoing | ListView::Upcoming => "Show next 3 matches?",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ListView::Ongoing => "No ongoing matches found.",
            ListView::Upcoming => "No upcoming matches found.",
            ListView::Recent => "No recent matches found.",
        }
    }

    fn shows_venue(self) -> bool {
        matches!(self, ListView::Ongoing | ListView::Upcoming)
    }

    fn shows_scores(self) -> bool {
        matches!(self, ListView::Ongoing | ListView::Recent)
    }
}

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

pub fn separator(len: usize) -> String {
    "-".repeat(len).grey().bold().to_string()
}

/// 12-hour wall clock, e.g. `3:07:09 PM`.
pub fn clock_label(now: DateTime<Local>) -> String {
    let (is_pm, hour) = now.hour12();
    let period = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{:02}:{:02} {period}", now.minute(), now.second())
}

fn format_score(short: &str, score: Option<&Score>) -> String {
    let (r, w, o) = score.map(|s| (s.r, s.w, s.o)).unwrap_or((0, 0, 0.0));
    format!(
        " {} : {}/{}({})",
        short.blue().bold(),
        r.to_string().yellow().bold(),
        w.to_string().yellow().bold(),
        o.to_string().yellow().bold()
    )
}

/// Score line for side `idx`, only when that side has a score entry.
pub fn score_line(m: &Match, idx: usize) -> Option<String> {
    let score = m.score_for(idx)?;
    Some(format_score(m.display_short(idx), Some(score)))
}

/// Score line for the live view; a side that has not batted shows `0/0(0)`.
pub fn live_score_line(m: &Match, idx: usize) -> String {
    format_score(m.display_short(idx), m.score_for(idx))
}

pub fn live_block(m: &Match, clock: &str) -> String {
    let sep = separator(m.name.chars().count() + 19);
    let lines = [
        format!("\n{} - {clock}:", "Last Update".green().bold()),
        sep.clone(),
        format!(" {}", m.name.as_str().green().bold()),
        live_score_line(m, 0),
        live_score_line(m, 1),
        format!(" {}", m.status.as_str().cyan().bold()),
        sep,
    ];
    lines.join("\n")
}

pub fn match_ended_notice(m: &Match) -> String {
    format!("{}\n {}", "Match Has Been Ended".yellow().bold(), m.status)
}

pub fn page_block(m: &Match, view: ListView) -> String {
    let mut lines = vec![
        format!(" {}", m.name.as_str().green().bold()),
        format!(" Date - {}", m.start_time_display().cyan().bold()),
    ];
    if view.shows_venue() {
        lines.push(format!(" Venue - {}", m.venue.as_str().green().bold()));
    }
    if view.shows_scores() {
        lines.extend((0..2).filter_map(|idx| score_line(m, idx)));
        lines.push(format!(" {}", m.status.as_str().cyan().bold()));
    }
    let width = m.name.chars().count().max(m.venue.chars().count());
    lines.push(String::new());
    lines.push(separator(width));
    lines.push(String::new());
    lines.join("\n")
}

pub fn page_header(view: ListView) -> String {
    format!("\n\n{}\n", view.header().yellow().bold())
}

pub fn abort_message(msg: &str) -> String {
    msg.red().bold().to_string()
}
