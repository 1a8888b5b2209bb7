use std::{fs, path::PathBuf};

use crate::args::RunConfig;
use crate::error::CoreError;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The config file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if there are no teams, a team id is blank or repeated,
/// or the squad size is zero
pub fn validate_run_config(config: &RunConfig) -> Result<(), CoreError> {
    if config.teams.is_empty() {
        return Err(CoreError::Config(
            "no teams configured; pass --teams or set teams in the config file".to_string(),
        ));
    }
    for (idx, team) in config.teams.iter().enumerate() {
        if team.trim().is_empty() {
            return Err(CoreError::Config("team ids must not be blank".to_string()));
        }
        if config.teams[..idx].contains(team) {
            return Err(CoreError::Config(format!("team '{team}' is listed twice")));
        }
    }
    if config.rules.squad_size == 0 {
        return Err(CoreError::Config("squad size must be at least 1".to_string()));
    }
    Ok(())
}
