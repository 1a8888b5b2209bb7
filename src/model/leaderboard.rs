use serde::{Deserialize, Serialize};

/// One fetched copy of the tournament leaderboard, as the live-golf-data API
/// returns it. Fields the scorer doesn't use are dropped on deserialize.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    #[serde(default)]
    pub cut_lines: Vec<CutLine>,
    #[serde(default)]
    pub leaderboard_rows: Vec<LeaderboardEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CutLine {
    #[serde(default)]
    pub cut_score: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub rounds: Vec<RoundResult>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    #[serde(default)]
    pub score_to_par: String,
}

impl LeaderboardSnapshot {
    /// The first published cut line, if the tournament has one yet.
    #[must_use]
    pub fn cut_line_score(&self) -> Option<&str> {
        self.cut_lines.first().map(|c| c.cut_score.as_str())
    }

    /// Linear scan; the first exact (case-sensitive) match wins.
    #[must_use]
    pub fn find_entry(&self, first_name: &str, last_name: &str) -> Option<&LeaderboardEntry> {
        self.leaderboard_rows
            .iter()
            .find(|row| row.first_name == first_name && row.last_name == last_name)
    }
}

impl LeaderboardEntry {
    #[must_use]
    pub fn is_cut(&self) -> bool {
        self.position.eq_ignore_ascii_case("CUT")
    }
}
