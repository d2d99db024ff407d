use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::style::Stylize;
use log::info;

use crate::classify::{self, has_ended};
use crate::cricapi::MatchSource;
use crate::model::Match;
use crate::prompt::Prompter;
use crate::render::{self, ListView};
use crate::ticker::Ticker;

pub const PAGE_SIZE: usize = 3;
pub const TEAM_PROMPT: &str = "Enter team name to filter matches:";
pub const NO_TEAM_MATCHES: &str = "No matches found for the specified team.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveFrame {
    Running,
    Ended,
}

#[derive(Debug, Clone, Copy)]
pub struct LiveOptions {
    pub interval: Duration,
    /// Stop after this many timed refreshes. `None` runs until a match ends.
    pub max_refreshes: Option<u64>,
}

/// Fetch the view's source set and narrow it to the view's status class.
pub fn load_list(source: &dyn MatchSource, view: ListView) -> Result<Vec<Match>> {
    let matches = match view {
        ListView::Ongoing => classify::filter_ongoing(&source.fetch_current()?),
        ListView::Upcoming => classify::filter_upcoming(&source.fetch_upcoming()?),
        ListView::Recent => classify::filter_recent(&source.fetch_current()?),
    };
    info!("{} {:?} matches", matches.len(), view);
    Ok(matches)
}

/// Show `view` page by page. Returns the number of pages shown; an empty set
/// prints the abort message and shows nothing else.
pub fn show_list<W: Write>(
    source: &dyn MatchSource,
    view: ListView,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<usize> {
    let matches = load_list(source, view)?;
    if matches.is_empty() {
        writeln!(out, "{}", render::abort_message(view.empty_message()))?;
        return Ok(0);
    }
    paginate(&matches, view, prompter, out)
}

/// Prompts only between pages, so N matches take at most `ceil(N / 3) - 1`
/// confirmations.
pub fn paginate<W: Write>(
    matches: &[Match],
    view: ListView,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<usize> {
    let total_pages = matches.len().div_ceil(PAGE_SIZE);
    let mut shown = 0;

    for (idx, page) in matches.chunks(PAGE_SIZE).enumerate() {
        render::clear_screen(out)?;
        writeln!(out, "{}", render::page_header(view))?;
        for m in page {
            writeln!(out, "{}", render::page_block(m, view))?;
        }
        out.flush()?;
        shown += 1;

        let is_last = idx + 1 == total_pages;
        if is_last || !prompter.confirm(view.next_page_prompt(), true)? {
            break;
        }
    }

    Ok(shown)
}

/// Prompt for a team, then keep its current matches on screen until one ends.
pub fn live_scores<W: Write>(
    source: &dyn MatchSource,
    prompter: &mut dyn Prompter,
    out: &mut W,
    opts: LiveOptions,
) -> Result<()> {
    let team = prompter.input(TEAM_PROMPT)?;
    live_team(source, &team, out, opts)
}

/// Live view for a team that has already been asked for.
pub fn live_team<W: Write>(
    source: &dyn MatchSource,
    team: &str,
    out: &mut W,
    opts: LiveOptions,
) -> Result<()> {
    let scores = classify::filter_by_team(&source.fetch_current()?, team);
    if scores.is_empty() {
        writeln!(out, "{}", NO_TEAM_MATCHES.yellow().bold())?;
        return Ok(());
    }
    run_live(&scores, out, opts)
}

/// Render `snapshot` now and on every tick. The snapshot is not re-fetched.
pub fn run_live<W: Write>(snapshot: &[Match], out: &mut W, opts: LiveOptions) -> Result<()> {
    if render_live(snapshot, out)? == LiveFrame::Ended {
        return Ok(());
    }

    let mut ticker = Ticker::spawn(opts.interval);
    while let Some(tick) = ticker.wait() {
        if render_live(snapshot, out)? == LiveFrame::Ended {
            break;
        }
        if opts.max_refreshes.is_some_and(|max| tick >= max) {
            break;
        }
    }
    ticker.cancel();
    Ok(())
}

pub fn render_live<W: Write>(snapshot: &[Match], out: &mut W) -> Result<LiveFrame> {
    render::clear_screen(out)?;
    let clock = render::clock_label(Local::now());
    for m in snapshot {
        if has_ended(m) {
            writeln!(out, "{}", render::match_ended_notice(m))?;
            out.flush()?;
            return Ok(LiveFrame::Ended);
        }
        writeln!(out, "{}", render::live_block(m, &clock))?;
    }
    out.flush()?;
    Ok(LiveFrame::Running)
}
