use serde::{Deserialize, Serialize};

/// One fixture as returned by the CricAPI `currentMatches` / `matches` endpoints.
///
/// Index `i` of `team_info` and `score` refers to the same side as `teams[i]`,
/// though either list may be shorter than `teams` (or missing entirely) before
/// a side has batted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "dateTimeGMT", default)]
    pub date_time_gmt: String,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(rename = "teamInfo", default)]
    pub team_info: Vec<TeamInfo>,
    #[serde(default)]
    pub score: Vec<Score>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub shortname: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub r: u32,
    #[serde(default)]
    pub w: u32,
    #[serde(default)]
    pub o: f64,
    #[serde(default)]
    pub inning: Option<String>,
}

/// Envelope shared by every CricAPI endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<Match>>,
}

impl Match {
    pub fn team(&self, idx: usize) -> Option<&str> {
        self.teams.get(idx).map(String::as_str)
    }

    pub fn short_name(&self, idx: usize) -> Option<&str> {
        self.team_info
            .get(idx)
            .and_then(|info| info.shortname.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Short name for display; falls back to the full team name, then `?`.
    pub fn display_short(&self, idx: usize) -> &str {
        self.short_name(idx)
            .or_else(|| self.team(idx))
            .unwrap_or("?")
    }

    pub fn score_for(&self, idx: usize) -> Option<&Score> {
        self.score.get(idx)
    }

    /// `2024-03-01T09:30:00` -> `2024-03-01 09:30:00`.
    pub fn start_time_display(&self) -> String {
        self.date_time_gmt.replacen('T', " ", 1)
    }
}
