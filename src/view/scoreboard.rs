use chrono::{DateTime, Local};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{ScoredPlayer, TeamResult};

pub const DEFAULT_OUTPUT_PATH: &str = "docs/index.html";
pub const PAGE_TITLE: &str = "Scoreboard";

/// e.g. "Apr 13, 2025 6:42PM -04:00"
#[must_use]
pub fn format_last_updated(when: &DateTime<Local>) -> String {
    when.format("%b %-d, %Y %-I:%M%p %:z").to_string()
}

fn row_class(player: &ScoredPlayer) -> &'static str {
    if player.is_total_row() {
        "total"
    } else if player.excluded {
        "excluded"
    } else {
        "counting"
    }
}

#[must_use]
pub fn render_team_table(team: &TeamResult) -> Markup {
    html! {
        section class="team" id=(format!("team-{}", team.team_id)) {
            h2 { (team.team_name) }
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLAYER" }
                        th { "R1" }
                        th { "R2" }
                        th { "R3" }
                        th { "R4" }
                        th { "TOTAL" }
                    }
                }
                tbody {
                    @for player in &team.players {
                        tr class=(row_class(player)) {
                            td { (player.full_name) }
                            @for val in player.rounds() {
                                td { (val) }
                            }
                            td { (player.total) }
                        }
                    }
                }
            }
            @if !team.history.is_empty() {
                ul class="history" {
                    @for line in &team.history {
                        li { (line) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_scoreboard_page(teams: &[TeamResult], last_updated: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (PAGE_TITLE) }
                style { (STYLES) }
            }
            body {
                h1 { (PAGE_TITLE) }
                @for team in teams {
                    (render_team_table(team))
                }
                p class="last-updated" { "Last updated: " (last_updated) }
            }
        }
    }
}

/// Writes through a sibling temp file so a failed run leaves the previous
/// page in place.
///
/// # Errors
/// Returns an error if the directory, temp file or rename fails.
pub fn write_page(path: &Path, markup: &Markup) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp_path = path.with_extension("html.tmp");
    fs::write(&tmp_path, markup.0.as_bytes())
        .map_err(|e| CoreError::Io(format!("write {}: {e}", tmp_path.display())))?;
    fs::rename(&tmp_path, path)
        .map_err(|e| CoreError::Io(format!("rename to {}: {e}", path.display())))?;
    Ok(())
}

const STYLES: &str = r"
body { font-family: sans-serif; margin: 2em; }
.styled-table { border-collapse: collapse; margin-bottom: 1em; min-width: 24em; }
.styled-table th, .styled-table td { padding: 0.3em 0.8em; text-align: right; }
.styled-table td:first-child, .styled-table th:first-child { text-align: left; }
tr.excluded { color: #999; text-decoration: line-through; }
tr.total { font-weight: bold; border-top: 2px solid #333; }
.last-updated { font-size: 0.8em; color: #666; }
";
