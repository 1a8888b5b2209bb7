use tracing::debug;

use crate::model::{LeaderboardEntry, LeaderboardSnapshot};

pub const ROUNDS_PER_TOURNAMENT: usize = 4;
pub const DEFAULT_CUT_PENALTY_OFFSET: i32 = 3;

/// Lenient strokes-to-par parse: "+2" -> 2, "-3" -> -3, "E" -> 0.
/// Anything unparseable is treated as 0.
#[must_use]
pub fn parse_strokes(display_value: &str) -> i32 {
    let value = display_value.trim();
    if value.eq_ignore_ascii_case("E") {
        return 0;
    }
    match value.strip_prefix('+').unwrap_or(value).parse::<i32>() {
        Ok(strokes) => strokes,
        Err(_) => {
            if !value.is_empty() {
                debug!("Unparseable strokes value {display_value:?}, using 0");
            }
            0
        }
    }
}

/// Score given to each unplayed weekend round of a player who missed the cut:
/// `abs(cut line) + offset`, or 0 when no cut line has been published.
#[must_use]
pub fn cut_penalty(snapshot: &LeaderboardSnapshot, offset: i32) -> i32 {
    match snapshot.cut_line_score() {
        Some(cut_score) => i32::try_from(parse_strokes(cut_score).unsigned_abs())
            .unwrap_or(i32::MAX)
            .saturating_add(offset),
        None => 0,
    }
}

/// Derives R1..R4 for a matched leaderboard row. A cut player keeps the two
/// rounds they played and takes `penalty` for rounds 3 and 4.
#[must_use]
pub fn extract_rounds(entry: &LeaderboardEntry, penalty: i32) -> [i32; ROUNDS_PER_TOURNAMENT] {
    let mut rounds = [0; ROUNDS_PER_TOURNAMENT];
    let is_cut = entry.is_cut();

    for (idx, slot) in rounds.iter_mut().enumerate() {
        match entry.rounds.get(idx) {
            _ if is_cut && idx >= 2 => *slot = penalty,
            Some(round) => *slot = parse_strokes(&round.score_to_par),
            None => {}
        }
    }

    // Nothing per-round yet (or the API only sent a total).
    if entry.rounds.is_empty() {
        rounds[0] = parse_strokes(&entry.total);
    }

    rounds
}
