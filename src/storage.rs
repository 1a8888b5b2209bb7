use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{LeaderboardSnapshot, Roster};

pub const DEFAULT_TEAMS_DIR: &str = "teams";
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.json";

pub trait Storage {
    /// # Errors
    /// Returns an error if the snapshot can't be read or parsed.
    fn load_snapshot(&self) -> Result<LeaderboardSnapshot, CoreError>;

    /// # Errors
    /// Returns an error if the roster for `team_id` can't be read or parsed.
    fn load_roster(&self, team_id: &str) -> Result<Roster, CoreError>;

    /// # Errors
    /// Returns an error if the snapshot can't be written.
    fn save_snapshot(&self, pretty_json: &str) -> Result<(), CoreError>;
}

/// Rosters live at `<teams_dir>/<team_id>.json`, the snapshot at a single path.
#[derive(Debug, Clone)]
pub struct FileStorage {
    teams_dir: PathBuf,
    leaderboard_path: PathBuf,
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_TEAMS_DIR, DEFAULT_LEADERBOARD_PATH)
    }
}

impl FileStorage {
    #[must_use]
    pub fn new(teams_dir: impl Into<PathBuf>, leaderboard_path: impl Into<PathBuf>) -> Self {
        Self {
            teams_dir: teams_dir.into(),
            leaderboard_path: leaderboard_path.into(),
        }
    }

    #[must_use]
    pub fn roster_path(&self, team_id: &str) -> PathBuf {
        self.teams_dir.join(format!("{team_id}.json"))
    }

    #[must_use]
    pub fn leaderboard_path(&self) -> &Path {
        &self.leaderboard_path
    }
}

impl Storage for FileStorage {
    fn load_snapshot(&self) -> Result<LeaderboardSnapshot, CoreError> {
        let snapshot: LeaderboardSnapshot = read_json(&self.leaderboard_path)?;
        debug!(
            "Loaded {} leaderboard rows from {}",
            snapshot.leaderboard_rows.len(),
            self.leaderboard_path.display()
        );
        Ok(snapshot)
    }

    fn load_roster(&self, team_id: &str) -> Result<Roster, CoreError> {
        read_json(&self.roster_path(team_id))
    }

    fn save_snapshot(&self, pretty_json: &str) -> Result<(), CoreError> {
        if let Some(parent) = self.leaderboard_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.leaderboard_path, pretty_json).map_err(|e| {
            CoreError::Io(format!("write {}: {e}", self.leaderboard_path.display()))
        })?;
        info!("Saved leaderboard data to {}", self.leaderboard_path.display());
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CoreError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.display().to_string()),
        _ => CoreError::Io(format!("read {}: {e}", path.display())),
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| CoreError::Parse(format!("parse {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_roster_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path(), dir.path().join("leaderboard.json"));
        let err = storage.load_roster("Nobody").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(ref p) if p.ends_with("Nobody.json")));
    }

    #[test]
    fn malformed_snapshot_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(dir.path(), &path);
        assert!(matches!(storage.load_snapshot(), Err(CoreError::Parse(_))));
    }

    #[test]
    fn saved_snapshot_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path(), dir.path().join("data/leaderboard.json"));
        storage
            .save_snapshot(
                r#"{"cutLines":[{"cutScore":"+2"}],"leaderboardRows":[{"firstName":"Jon","lastName":"Rahm","total":"-4","position":"1","rounds":[{"scoreToPar":"-4"}],"status":"active"}]}"#,
            )
            .unwrap();
        let snapshot = storage.load_snapshot().unwrap();
        assert_eq!(snapshot.cut_line_score(), Some("+2"));
        assert_eq!(snapshot.leaderboard_rows[0].rounds[0].score_to_par, "-4");
    }

    #[test]
    fn roster_history_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Pat.json"),
            r#"{"teamName":"Pat's Picks","players":["Jon Rahm"]}"#,
        )
        .unwrap();
        let storage = FileStorage::new(dir.path(), dir.path().join("leaderboard.json"));
        let roster = storage.load_roster("Pat").unwrap();
        assert_eq!(roster.team_name, "Pat's Picks");
        assert!(roster.history.is_empty());
    }

    #[test]
    fn roster_without_team_name_loads() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Alex.json"), r#"{"players":["Jon Rahm"]}"#).unwrap();
        let storage = FileStorage::new(dir.path(), dir.path().join("leaderboard.json"));
        let roster = storage.load_roster("Alex").unwrap();
        assert_eq!(roster.team_name, "");
        assert_eq!(roster.players, vec!["Jon Rahm"]);
    }
}
