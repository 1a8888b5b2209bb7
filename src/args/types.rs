use clap::Parser;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::controller::leaderboard::LeaderboardRequest;
use crate::score::ScoringRules;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Score fantasy golf rosters against the live leaderboard and render a static scoreboard", long_about = None)]
pub struct Args {
    /// Optional TOML file; flags given on the command line win over it.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Fetch the latest leaderboard from the API before scoring.
    #[arg(long)]
    pub refresh: bool,
    /// Comma-separated team ids, in display order. Each maps to <teams-dir>/<id>.json.
    #[arg(long, value_name = "TEAMS", value_delimiter = ',')]
    pub teams: Vec<String>,
    #[arg(long, value_name = "TEAMS_DIR")]
    pub teams_dir: Option<PathBuf>,
    #[arg(long, value_name = "LEADERBOARD_JSON")]
    pub leaderboard: Option<PathBuf>,
    #[arg(short = 'o', long, value_name = "OUTPUT_HTML")]
    pub output: Option<PathBuf>,
    /// Print the scored teams as JSON instead of writing the HTML page.
    #[arg(long)]
    pub json: bool,
    /// How many of each team's best players count.
    #[arg(long, value_name = "SQUAD_SIZE")]
    pub squad_size: Option<usize>,
    /// Added to the absolute cut line to score a cut player's weekend rounds.
    #[arg(long, value_name = "CUT_PENALTY_OFFSET", allow_hyphen_values = true)]
    pub cut_penalty_offset: Option<i32>,
    #[arg(long, value_name = "ORG_ID")]
    pub org_id: Option<String>,
    #[arg(long, value_name = "TOURN_ID")]
    pub tourn_id: Option<String>,
    #[arg(long, value_name = "YEAR")]
    pub year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub teams: Option<Vec<String>>,
    pub teams_dir: Option<PathBuf>,
    pub leaderboard: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub squad_size: Option<usize>,
    pub cut_penalty_offset: Option<i32>,
    pub org_id: Option<String>,
    pub tourn_id: Option<String>,
    pub year: Option<i32>,
    /// full name -> [first, last]
    #[serde(default)]
    pub name_overrides: BTreeMap<String, (String, String)>,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub refresh: bool,
    pub json: bool,
    pub teams: Vec<String>,
    pub teams_dir: PathBuf,
    pub leaderboard: PathBuf,
    pub output: PathBuf,
    pub rules: ScoringRules,
    pub request: LeaderboardRequest,
    pub name_overrides: BTreeMap<String, (String, String)>,
}
