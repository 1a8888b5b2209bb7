use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub players: Vec<String>,
    /// Display-only annotations, never scored.
    #[serde(default)]
    pub history: Vec<String>,
}
