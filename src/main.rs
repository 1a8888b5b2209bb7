use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rusty_golf_board::args;
use rusty_golf_board::controller::leaderboard::{RapidApiClient, refresh_leaderboard};
use rusty_golf_board::score::build_scoreboard;
use rusty_golf_board::storage::FileStorage;
use rusty_golf_board::view::scoreboard::format_last_updated;
use rusty_golf_board::{name_matcher_for, publish_scoreboard};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args::args_checks().context("load config")?;
    let storage = FileStorage::new(&config.teams_dir, &config.leaderboard);

    if config.refresh {
        let client = RapidApiClient::from_env().context("set up leaderboard client")?;
        refresh_leaderboard(&client, &storage, &config.request)
            .context("failed to refresh leaderboard")?;
    }

    if config.json {
        let matcher = name_matcher_for(&config);
        let teams = build_scoreboard(&storage, &config.teams, &matcher, config.rules)
            .context("build scoreboard")?;
        println!("{}", serde_json::to_string_pretty(&teams)?);
        return Ok(());
    }

    let teams = publish_scoreboard(
        &config,
        &storage,
        &config.output,
        &format_last_updated(&Local::now()),
    )
    .with_context(|| format!("render failed: {}", config.output.display()))?;
    info!(
        "Wrote scoreboard for {} teams to {}",
        teams.len(),
        config.output.display()
    );
    Ok(())
}
