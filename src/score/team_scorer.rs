use tracing::{debug, warn};

use super::name_matcher::NameMatcher;
use super::round_extractor::{DEFAULT_CUT_PENALTY_OFFSET, cut_penalty, extract_rounds};
use super::sort_utils::{mark_excluded, sort_players};
use crate::model::{LeaderboardSnapshot, Roster, ScoredPlayer, TOTAL_ROW_NAME, TeamResult};

pub const DEFAULT_SQUAD_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    /// How many of a team's best players count toward its total.
    pub squad_size: usize,
    pub cut_penalty_offset: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            squad_size: DEFAULT_SQUAD_SIZE,
            cut_penalty_offset: DEFAULT_CUT_PENALTY_OFFSET,
        }
    }
}

/// Scores rosters against one leaderboard snapshot.
///
/// The cut penalty is derived once, when the scorer is built; every team
/// scored through it shares that value.
pub struct TeamScorer<'a> {
    snapshot: &'a LeaderboardSnapshot,
    matcher: &'a NameMatcher,
    squad_size: usize,
    penalty: i32,
}

impl<'a> TeamScorer<'a> {
    #[must_use]
    pub fn new(
        snapshot: &'a LeaderboardSnapshot,
        matcher: &'a NameMatcher,
        rules: ScoringRules,
    ) -> Self {
        let penalty = cut_penalty(snapshot, rules.cut_penalty_offset);
        debug!("Cut penalty for this snapshot: {penalty}");
        Self {
            snapshot,
            matcher,
            squad_size: rules.squad_size,
            penalty,
        }
    }

    #[must_use]
    pub fn penalty(&self) -> i32 {
        self.penalty
    }

    /// Looks up and scores one roster name. `None` when the name can't be
    /// split or isn't on the leaderboard.
    #[must_use]
    pub fn score_player(&self, full_name: &str) -> Option<ScoredPlayer> {
        let (first_name, last_name) = self.matcher.split_name(full_name)?;
        let Some(entry) = self.snapshot.find_entry(first_name, last_name) else {
            warn!("Player not found in leaderboard: {full_name}");
            return None;
        };
        Some(ScoredPlayer::from_rounds(
            full_name,
            extract_rounds(entry, self.penalty),
        ))
    }

    /// Scores, ranks and flags a list of names, then appends the total row.
    #[must_use]
    pub fn score_players(&self, names: &[String]) -> Vec<ScoredPlayer> {
        let scored: Vec<ScoredPlayer> = names
            .iter()
            .filter_map(|name| self.score_player(name))
            .collect();

        let mut players = sort_players(scored);
        mark_excluded(&mut players, self.squad_size);

        let total = total_row(&players);
        players.push(total);
        players
    }

    #[must_use]
    pub fn score_team(&self, team_id: &str, roster: &Roster) -> TeamResult {
        TeamResult::new(team_id, roster, self.score_players(&roster.players))
    }
}

/// Sums the counting players round by round.
#[must_use]
pub fn total_row(players: &[ScoredPlayer]) -> ScoredPlayer {
    let mut rounds = [0i32; 4];
    for player in players.iter().filter(|p| !p.excluded) {
        for (sum, val) in rounds.iter_mut().zip(player.rounds()) {
            *sum = sum.saturating_add(val);
        }
    }
    ScoredPlayer::from_rounds(TOTAL_ROW_NAME, rounds)
}
