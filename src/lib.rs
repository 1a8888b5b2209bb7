pub mod args;
pub mod error;
pub mod model;
pub mod score;
pub mod storage;
pub mod controller {
    pub mod leaderboard;
}
pub mod view {
    pub mod scoreboard;
}

use std::path::Path;

use crate::error::CoreError;
use crate::model::TeamResult;
use crate::score::{NameMatcher, build_scoreboard};
use crate::storage::Storage;
use crate::view::scoreboard::{render_scoreboard_page, write_page};

/// Built-in name overrides plus any from the config file.
#[must_use]
pub fn name_matcher_for(config: &args::RunConfig) -> NameMatcher {
    NameMatcher::with_overrides(
        config
            .name_overrides
            .iter()
            .map(|(full, (first, last))| (full.as_str(), (first.as_str(), last.as_str()))),
    )
}

/// Scores every configured team and writes the page to `output`. Nothing is
/// written unless every team scored.
///
/// # Errors
/// Returns an error if any roster or the snapshot fails to load, or the page
/// can't be written.
pub fn publish_scoreboard(
    config: &args::RunConfig,
    storage: &dyn Storage,
    output: &Path,
    last_updated: &str,
) -> Result<Vec<TeamResult>, CoreError> {
    let matcher = name_matcher_for(config);
    let teams = build_scoreboard(storage, &config.teams, &matcher, config.rules)?;
    write_page(output, &render_scoreboard_page(&teams, last_updated))?;
    Ok(teams)
}
