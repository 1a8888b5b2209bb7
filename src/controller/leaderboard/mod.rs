pub mod client;

pub use client::*;

use serde_json::Value;
use tracing::info;

use crate::error::CoreError;
use crate::storage::Storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRequest {
    pub org_id: String,
    pub tourn_id: String,
    pub year: i32,
}

impl Default for LeaderboardRequest {
    fn default() -> Self {
        Self {
            org_id: "1".to_string(),
            tourn_id: "026".to_string(),
            year: 2025,
        }
    }
}

pub trait LeaderboardApiClient {
    /// Raw response body for the requested tournament.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    fn fetch_leaderboard(&self, request: &LeaderboardRequest) -> Result<String, CoreError>;
}

/// Fetches the leaderboard and persists it pretty-printed through `storage`.
///
/// # Errors
/// Returns an error if the fetch fails, the body isn't JSON, or the save fails.
pub fn refresh_leaderboard(
    api: &dyn LeaderboardApiClient,
    storage: &dyn Storage,
    request: &LeaderboardRequest,
) -> Result<(), CoreError> {
    let body = api.fetch_leaderboard(request)?;
    let payload: Value = serde_json::from_str(&body)
        .map_err(|e| CoreError::Parse(format!("leaderboard response is not JSON: {e}")))?;
    let pretty = serde_json::to_string_pretty(&payload)?;
    storage.save_snapshot(&pretty)?;
    info!(
        "Fetched latest leaderboard for tournament {} ({})",
        request.tourn_id, request.year
    );
    Ok(())
}
