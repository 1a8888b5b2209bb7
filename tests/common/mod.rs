#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusty_golf_board::model::{ScoredPlayer, TeamResult};
use rusty_golf_board::storage::FileStorage;

pub fn fixture_root(test: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(test)
}

pub fn fixture_storage(test: &str) -> FileStorage {
    let root = fixture_root(test);
    FileStorage::new(root.join("teams"), fixture_root("test01").join("leaderboard.json"))
}

pub fn team_ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| (*s).to_string()).collect()
}

pub fn player<'a>(team: &'a TeamResult, name: &str) -> &'a ScoredPlayer {
    team.players
        .iter()
        .find(|p| p.full_name == name)
        .unwrap_or_else(|| panic!("{name} missing from {}", team.team_name))
}

pub fn names(team: &TeamResult) -> Vec<&str> {
    team.players.iter().map(|p| p.full_name.as_str()).collect()
}
