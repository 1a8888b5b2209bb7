pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::controller::leaderboard::LeaderboardRequest;
use crate::error::CoreError;
use crate::score::{DEFAULT_CUT_PENALTY_OFFSET, DEFAULT_SQUAD_SIZE, ScoringRules};
use crate::storage::{DEFAULT_LEADERBOARD_PATH, DEFAULT_TEAMS_DIR};
use crate::view::scoreboard::DEFAULT_OUTPUT_PATH;

/// Parses the command line and resolves it against the config file.
///
/// # Errors
/// Returns an error if the config file can't be read or the result is invalid.
pub fn args_checks() -> Result<RunConfig, CoreError> {
    load_config(Args::parse())
}

/// Command line beats config file beats built-in default.
///
/// # Errors
/// Returns an error if the config file can't be read or parsed, or the
/// merged config fails validation.
pub fn load_config(args: Args) -> Result<RunConfig, CoreError> {
    let file_config = match args.config_toml.as_ref() {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| CoreError::Config(format!("read {}: {e}", path.display())))?;
            toml::from_str::<FileConfig>(&contents)
                .map_err(|e| CoreError::Config(format!("parse {}: {e}", path.display())))?
        }
        None => FileConfig::default(),
    };

    let defaults = LeaderboardRequest::default();
    let teams = if args.teams.is_empty() {
        file_config.teams.unwrap_or_default()
    } else {
        args.teams
    };

    let config = RunConfig {
        refresh: args.refresh,
        json: args.json,
        teams: teams.into_iter().map(|t| t.trim().to_string()).collect(),
        teams_dir: args
            .teams_dir
            .or(file_config.teams_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEAMS_DIR)),
        leaderboard: args
            .leaderboard
            .or(file_config.leaderboard)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEADERBOARD_PATH)),
        output: args
            .output
            .or(file_config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH)),
        rules: ScoringRules {
            squad_size: args
                .squad_size
                .or(file_config.squad_size)
                .unwrap_or(DEFAULT_SQUAD_SIZE),
            cut_penalty_offset: args
                .cut_penalty_offset
                .or(file_config.cut_penalty_offset)
                .unwrap_or(DEFAULT_CUT_PENALTY_OFFSET),
        },
        request: LeaderboardRequest {
            org_id: args
                .org_id
                .or(file_config.org_id)
                .unwrap_or(defaults.org_id),
            tourn_id: args
                .tourn_id
                .or(file_config.tourn_id)
                .unwrap_or(defaults.tourn_id),
            year: args.year.or(file_config.year).unwrap_or(defaults.year),
        },
        name_overrides: file_config.name_overrides,
    };

    validation::validate_run_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_toml(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("board.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_file() {
        let args = Args::parse_from(["rusty-golf-board", "--teams", "Matt,JR,Pat"]);
        let config = load_config(args).unwrap();
        assert_eq!(config.teams, vec!["Matt", "JR", "Pat"]);
        assert_eq!(config.teams_dir, PathBuf::from("teams"));
        assert_eq!(config.leaderboard, PathBuf::from("leaderboard.json"));
        assert_eq!(config.output, PathBuf::from("docs/index.html"));
        assert_eq!(config.rules, ScoringRules::default());
        assert_eq!(config.request, LeaderboardRequest::default());
        assert!(!config.refresh);
    }

    #[test]
    fn cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(
            &dir,
            r#"
teams = ["Matt", "JR"]
squad_size = 3
cut_penalty_offset = 2
tourn_id = "014"

[name_overrides]
"Byeong Hun An" = ["Byeong Hun", "An"]
"#,
        );
        let args = Args::parse_from([
            "rusty-golf-board",
            "--config-toml",
            path.to_str().unwrap(),
            "--squad-size",
            "5",
            "--refresh",
        ]);
        let config = load_config(args).unwrap();
        assert_eq!(config.teams, vec!["Matt", "JR"]);
        assert_eq!(config.rules.squad_size, 5);
        assert_eq!(config.rules.cut_penalty_offset, 2);
        assert_eq!(config.request.tourn_id, "014");
        assert!(config.refresh);
        assert_eq!(
            config.name_overrides.get("Byeong Hun An"),
            Some(&("Byeong Hun".to_string(), "An".to_string()))
        );
    }

    #[test]
    fn rejects_missing_teams_and_zero_squad() {
        let err = load_config(Args::parse_from(["rusty-golf-board"])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let args = Args::parse_from(["rusty-golf-board", "--teams", "A", "--squad-size", "0"]);
        assert!(matches!(load_config(args), Err(CoreError::Config(_))));

        let args = Args::parse_from(["rusty-golf-board", "--teams", "A,B,A"]);
        assert!(matches!(load_config(args), Err(CoreError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_toml(&dir, "teams = [\"A\"]\nsquad = 4\n");
        let args = Args::parse_from(["rusty-golf-board", "--config-toml", path.to_str().unwrap()]);
        assert!(matches!(load_config(args), Err(CoreError::Config(_))));
    }
}
