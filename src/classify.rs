//! Status and team predicates over fetched match sets.
//!
//! CricAPI only exposes match state as free text (`"Match not started"`,
//! `"India won by 5 wickets"`, `"India need 20 runs"`), so classification is a
//! handful of substring checks rather than a status enum.

use crate::model::Match;

const NOT_STARTED: &str = "Match not started";

pub fn is_upcoming(m: &Match) -> bool {
    m.status.contains(NOT_STARTED)
}

pub fn has_ended(m: &Match) -> bool {
    m.status.contains("won")
}

pub fn is_ongoing(m: &Match) -> bool {
    !m.status.contains("not") && !has_ended(m)
}

/// Case-insensitive team lookup. The query matches when it is contained in the
/// match name or equals one of the team names or short names.
pub fn matches_team(m: &Match, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return false;
    }
    if m.name.to_lowercase().contains(&query) {
        return true;
    }
    (0..2).any(|idx| {
        let team_hit = m
            .team(idx)
            .is_some_and(|team| team.to_lowercase() == query);
        let short_hit = m
            .short_name(idx)
            .is_some_and(|short| short.to_lowercase() == query);
        team_hit || short_hit
    })
}

pub fn filter_by_team(matches: &[Match], name: &str) -> Vec<Match> {
    matches
        .iter()
        .filter(|m| matches_team(m, name))
        .cloned()
        .collect()
}

pub fn filter_ongoing(matches: &[Match]) -> Vec<Match> {
    matches.iter().filter(|m| is_ongoing(m)).cloned().collect()
}

pub fn filter_upcoming(matches: &[Match]) -> Vec<Match> {
    matches.iter().filter(|m| is_upcoming(m)).cloned().collect()
}

pub fn filter_recent(matches: &[Match]) -> Vec<Match> {
    matches.iter().filter(|m| has_ended(m)).cloned().collect()
}
