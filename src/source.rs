use chrono::{Datelike, NaiveDate};
use tracing::{error, info, info_span};

use crate::cli::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

/// Something that can hand back the raw scoreboard body for a date.
pub trait ScoreboardSource {
    /// Where the scoreboard for `date` lives. Used for logging and error messages.
    fn url_for(&self, date: NaiveDate) -> String;

    /// One attempt, no retry.
    fn fetch(&self, date: NaiveDate) -> Result<Vec<u8>>;
}

/// The MLB gameday feed over HTTP.
#[derive(Debug, Clone)]
pub struct MlbScoreboard {
    base_url: String,
}

impl MlbScoreboard {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }
}

impl Default for MlbScoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ScoreboardSource for MlbScoreboard {
    fn url_for(&self, date: NaiveDate) -> String {
        format!(
            "{}/year_{:04}/month_{:02}/day_{:02}/master_scoreboard.json",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }

    fn fetch(&self, date: NaiveDate) -> Result<Vec<u8>> {
        let url = self.url_for(date);
        // Non-2xx comes back as Err(StatusCode) with ureq's default config.
        let response_result = {
            let _span = info_span!("scoreboard_fetch", url = %url).entered();
            ureq::get(&url).call()
        };
        match response_result {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut body_reader = response.into_body();
                match body_reader.read_to_vec() {
                    Ok(body) => {
                        info!(status, bytes = body.len(), "Fetched scoreboard");
                        Ok(body)
                    }
                    Err(e) => {
                        error!(error = %e, url = %url, "Failed to read scoreboard body");
                        Err(Error::Network { url, source: e })
                    }
                }
            }
            Err(e) => {
                error!(error = %e, url = %url, "Scoreboard request failed");
                Err(Error::Network { url, source: e })
            }
        }
    }
}
