use serde::{Deserialize, Serialize};

use crate::model::Roster;

pub const TOTAL_ROW_NAME: &str = "Total";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoredPlayer {
    #[serde(rename = "name")]
    pub full_name: String,
    pub r1: i32,
    pub r2: i32,
    pub r3: i32,
    pub r4: i32,
    pub total: i32,
    pub excluded: bool,
}

impl ScoredPlayer {
    /// Builds a player from four round values; `total` is always their sum,
    /// saturating at the `i32` bounds.
    #[must_use]
    pub fn from_rounds(full_name: impl Into<String>, rounds: [i32; 4]) -> Self {
        let [r1, r2, r3, r4] = rounds;
        Self {
            full_name: full_name.into(),
            r1,
            r2,
            r3,
            r4,
            total: rounds.iter().fold(0i32, |sum, val| sum.saturating_add(*val)),
            excluded: false,
        }
    }

    #[must_use]
    pub fn rounds(&self) -> [i32; 4] {
        [self.r1, self.r2, self.r3, self.r4]
    }

    #[must_use]
    pub fn is_total_row(&self) -> bool {
        self.full_name == TOTAL_ROW_NAME
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeamResult {
    pub team_id: String,
    pub team_name: String,
    pub history: Vec<String>,
    /// Sorted by total, excluded players trailing, synthetic total row last.
    pub players: Vec<ScoredPlayer>,
}

impl TeamResult {
    #[must_use]
    pub fn new(team_id: &str, roster: &Roster, players: Vec<ScoredPlayer>) -> Self {
        Self {
            team_id: team_id.to_string(),
            team_name: roster.team_name.clone(),
            history: roster.history.clone(),
            players,
        }
    }

    #[must_use]
    pub fn total_row(&self) -> Option<&ScoredPlayer> {
        self.players.last().filter(|p| p.is_total_row())
    }

    /// Scored players without the trailing total row.
    #[must_use]
    pub fn scored_players(&self) -> &[ScoredPlayer] {
        match self.total_row() {
            Some(_) => &self.players[..self.players.len() - 1],
            None => &self.players,
        }
    }
}
