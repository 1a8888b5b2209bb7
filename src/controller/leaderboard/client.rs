use reqwest::blocking::Client;

use super::{LeaderboardApiClient, LeaderboardRequest};
use crate::error::CoreError;

pub const RAPID_API_HOST: &str = "live-golf-data.p.rapidapi.com";
pub const RAPID_API_KEY_ENV: &str = "RAPID_GOLF_API_KEY";

pub struct RapidApiClient {
    client: Client,
    api_key: String,
}

impl RapidApiClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Reads the key from `RAPID_GOLF_API_KEY`.
    ///
    /// # Errors
    /// Returns a config error if the variable is unset.
    pub fn from_env() -> Result<Self, CoreError> {
        let api_key = std::env::var(RAPID_API_KEY_ENV)
            .map_err(|_| CoreError::Config(format!("{RAPID_API_KEY_ENV} is not set")))?;
        Ok(Self::new(api_key))
    }

    #[must_use]
    pub fn leaderboard_url(request: &LeaderboardRequest) -> String {
        format!(
            "https://{RAPID_API_HOST}/leaderboard?orgId={}&tournId={}&year={}",
            request.org_id, request.tourn_id, request.year
        )
    }
}

impl LeaderboardApiClient for RapidApiClient {
    fn fetch_leaderboard(&self, request: &LeaderboardRequest) -> Result<String, CoreError> {
        let resp = self
            .client
            .get(Self::leaderboard_url(request))
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", RAPID_API_HOST)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Network(format!(
                "unexpected status code: {status}"
            )));
        }
        Ok(resp.text()?)
    }
}
