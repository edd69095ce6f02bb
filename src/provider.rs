use std::path::Path;

use chrono::{Duration, NaiveDate};
use tracing::{info, instrument, warn};

use crate::cache::ScoreboardCache;
use crate::clock::league_today;
use crate::error::{Error, Result};
use crate::model::GameDayDataset;
use crate::request::SourceMode;
use crate::source::ScoreboardSource;

/// Decides between the cache and the remote source, and when to write the cache.
#[derive(Debug, Clone)]
pub struct GameDataProvider<S> {
    source: S,
}

impl<S: ScoreboardSource> GameDataProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the games for `date`, using today's league date for the cache write policy.
    pub fn fetch(&self, date: NaiveDate, cache_directory: &Path, mode: SourceMode) -> Result<GameDayDataset> {
        self.fetch_as_of(date, cache_directory, mode, league_today())
    }

    /// Same as [`fetch`](Self::fetch) with an explicit `today`, which makes the policy testable.
    ///
    /// A cached file always wins over the network. A fresh body is cached only once it has
    /// parsed cleanly and `date` is more than one day before `today`.
    #[instrument(level = "info", skip(self, cache_directory), fields(cache = %cache_directory.display()))]
    pub fn fetch_as_of(
        &self,
        date: NaiveDate,
        cache_directory: &Path,
        mode: SourceMode,
        today: NaiveDate,
    ) -> Result<GameDayDataset> {
        let cache = ScoreboardCache::new(cache_directory);
        let path = cache.path_for(date);

        if let Some(bytes) = cache.read(date)? {
            info!(path = %path.display(), "Reading scoreboard from cache");
            return GameDayDataset::from_slice(&bytes, &path.display().to_string());
        }

        if mode == SourceMode::LocalCacheOnly {
            warn!(path = %path.display(), "No cached scoreboard and web access disabled");
            return Err(Error::CacheMiss { path });
        }

        let url = self.source.url_for(date);
        let body = self.source.fetch(date)?;
        let dataset = GameDayDataset::from_slice(&body, &url)?;

        if is_cacheable(date, today) {
            cache.write(date, &body)?;
        } else {
            info!(%date, %today, "Not caching scoreboard for a recent or future date");
        }
        Ok(dataset)
    }
}

/// Only dates more than one day in the past are settled enough to cache.
pub fn is_cacheable(date: NaiveDate, today: NaiveDate) -> bool {
    today - date > Duration::days(1)
}
