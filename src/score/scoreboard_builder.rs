use tracing::info;

use super::name_matcher::NameMatcher;
use super::team_scorer::{ScoringRules, TeamScorer};
use crate::error::CoreError;
use crate::model::TeamResult;
use crate::storage::Storage;

/// Builds every configured team's result against one shared snapshot.
///
/// Teams come back in `team_ids` order. Any roster or snapshot load failure
/// aborts the whole build.
///
/// # Errors
/// Returns the first storage error encountered.
pub fn build_scoreboard(
    storage: &dyn Storage,
    team_ids: &[String],
    matcher: &NameMatcher,
    rules: ScoringRules,
) -> Result<Vec<TeamResult>, CoreError> {
    let snapshot = storage.load_snapshot()?;
    let scorer = TeamScorer::new(&snapshot, matcher, rules);

    let mut teams = Vec::with_capacity(team_ids.len());
    for team_id in team_ids {
        let roster = storage.load_roster(team_id)?;
        let team = scorer.score_team(team_id, &roster);
        if let Some(total) = team.total_row() {
            info!(
                "{} ({team_id}): {} of {} players scored, total {}",
                team.team_name,
                team.scored_players().len(),
                roster.players.len(),
                total.total
            );
        }
        teams.push(team);
    }
    Ok(teams)
}
