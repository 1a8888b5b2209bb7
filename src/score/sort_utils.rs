use crate::model::ScoredPlayer;

/// Ascending by total. Stable, so tied players keep roster order.
#[must_use]
pub fn sort_players(mut players: Vec<ScoredPlayer>) -> Vec<ScoredPlayer> {
    players.sort_by_key(|p| p.total);
    players
}

/// Flags everyone past the first `squad_size` entries as not counting.
pub fn mark_excluded(players: &mut [ScoredPlayer], squad_size: usize) {
    for (idx, player) in players.iter_mut().enumerate() {
        player.excluded = idx >= squad_size;
    }
}
