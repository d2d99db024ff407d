use std::io::Write;

use anyhow::Result;

use crate::config::AppConfig;
use crate::credentials::{self, KeyStore};
use crate::cricapi::{CricApi, MatchSource};
use crate::prompt::Prompter;
use crate::render::{self, ListView};
use crate::views::{self, LiveOptions};

pub const MENU_PROMPT: &str = "Choose an option:";
pub const INVALID_OPTION: &str = "Invalid option.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LiveScores,
    OngoingMatches,
    UpcomingMatches,
    RecentMatches,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::LiveScores,
        MenuChoice::OngoingMatches,
        MenuChoice::UpcomingMatches,
        MenuChoice::RecentMatches,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::LiveScores => "Live Scores",
            MenuChoice::OngoingMatches => "Ongoing Matches",
            MenuChoice::UpcomingMatches => "Upcoming Matches",
            MenuChoice::RecentMatches => "Recent Matches",
        }
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }
}

/// Ask which view to show. `None` after printing the invalid-option abort.
pub fn choose<W: Write>(prompter: &mut dyn Prompter, out: &mut W) -> Result<Option<MenuChoice>> {
    let labels = MenuChoice::ALL.map(MenuChoice::label);
    let picked = prompter.select(MENU_PROMPT, &labels)?;
    let Some(choice) = MenuChoice::from_index(picked) else {
        writeln!(out, "{}", render::abort_message(INVALID_OPTION))?;
        return Ok(None);
    };
    Ok(Some(choice))
}

pub fn dispatch<W: Write>(
    choice: MenuChoice,
    source: &dyn MatchSource,
    prompter: &mut dyn Prompter,
    out: &mut W,
    live: LiveOptions,
) -> Result<()> {
    match choice {
        MenuChoice::LiveScores => views::live_scores(source, prompter, out, live)?,
        MenuChoice::OngoingMatches => {
            views::show_list(source, ListView::Ongoing, prompter, out)?;
        }
        MenuChoice::UpcomingMatches => {
            views::show_list(source, ListView::Upcoming, prompter, out)?;
        }
        MenuChoice::RecentMatches => {
            views::show_list(source, ListView::Recent, prompter, out)?;
        }
    }
    Ok(())
}

/// One full session against the live CricAPI service.
pub fn run<W: Write>(
    cfg: &AppConfig,
    store: &dyn KeyStore,
    prompter: &mut dyn Prompter,
    out: &mut W,
) -> Result<()> {
    let validator = CricApi::new(cfg.base_url.clone(), String::new());
    let live = LiveOptions {
        interval: cfg.live_refresh,
        max_refreshes: None,
    };
    run_session(
        store,
        &validator,
        |api_key| validator.with_key(api_key),
        prompter,
        out,
        live,
    )
}

/// Menu, then key resolution, then the chosen view. Live Scores asks for the
/// team before the key so the prompts come in the same order as the view.
pub fn run_session<S, W>(
    store: &dyn KeyStore,
    validator: &dyn MatchSource,
    connect: impl FnOnce(String) -> S,
    prompter: &mut dyn Prompter,
    out: &mut W,
    live: LiveOptions,
) -> Result<()>
where
    S: MatchSource,
    W: Write,
{
    let Some(choice) = choose(prompter, out)? else {
        return Ok(());
    };
    let team = match choice {
        MenuChoice::LiveScores => Some(prompter.input(views::TEAM_PROMPT)?),
        _ => None,
    };

    let api_key = credentials::load_or_prompt(store, validator, prompter, out)?;
    let source = connect(api_key);

    match team {
        Some(team) => views::live_team(&source, &team, out, live),
        None => dispatch(choice, &source, prompter, out, live),
    }
}
