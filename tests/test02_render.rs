mod common;

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use rusty_golf_board::args::{Args, load_config};
use rusty_golf_board::publish_scoreboard;
use scraper::{Html, Selector};

use crate::common::{fixture_root, fixture_storage};

fn config_for(teams: &str, output: &Path) -> Result<rusty_golf_board::args::RunConfig> {
    let root = fixture_root("test01");
    let args = Args::parse_from([
        "rusty-golf-board",
        "--teams",
        teams,
        "--teams-dir",
        root.join("teams").to_str().unwrap_or_default(),
        "--leaderboard",
        root.join("leaderboard.json").to_str().unwrap_or_default(),
        "--output",
        output.to_str().unwrap_or_default(),
    ]);
    Ok(load_config(args)?)
}

#[test]
fn test02_page_has_a_table_per_team() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("docs/index.html");
    let config = config_for("JR,Matt,Pat", &output)?;

    publish_scoreboard(
        &config,
        &fixture_storage("test01"),
        &output,
        "Apr 12, 2025 6:00PM -04:00",
    )?;

    let document = Html::parse_document(&fs::read_to_string(&output)?);
    let heading = Selector::parse("section.team h2").expect("selector");
    let headings: Vec<String> = document
        .select(&heading)
        .map(|h| h.text().collect())
        .collect();
    assert_eq!(headings, vec!["JR", "Matt", "Pat"]);

    let excluded = Selector::parse("#team-Matt tr.excluded td:first-child").expect("selector");
    let excluded: Vec<String> = document
        .select(&excluded)
        .map(|td| td.text().collect())
        .collect();
    assert_eq!(excluded, vec!["Jordan Spieth"]);

    let total = Selector::parse("#team-Matt tr.total td").expect("selector");
    let cells: Vec<String> = document
        .select(&total)
        .map(|td| td.text().collect())
        .collect();
    assert_eq!(cells, vec!["Total", "-5", "-1", "2", "8", "4"]);

    let history = Selector::parse("#team-Pat ul.history li").expect("selector");
    assert_eq!(document.select(&history).count(), 2);

    let stamp = Selector::parse("p.last-updated").expect("selector");
    let stamp: String = document
        .select(&stamp)
        .next()
        .map(|p| p.text().collect())
        .unwrap_or_default();
    assert!(stamp.ends_with("Apr 12, 2025 6:00PM -04:00"));
    Ok(())
}

#[test]
fn test02_failed_build_keeps_previous_page() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("index.html");
    fs::write(&output, "previous good page")?;
    let config = config_for("Matt,Ghost", &output)?;

    let result = publish_scoreboard(&config, &fixture_storage("test01"), &output, "now");

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&output)?, "previous good page");
    Ok(())
}
