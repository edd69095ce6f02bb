use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Raw scoreboard bodies on disk, one `<YYYY-MM-DD>.json` per date.
/// The file existing is the cache hit; there is no freshness metadata.
#[derive(Debug, Clone)]
pub struct ScoreboardCache {
    dir: PathBuf,
}

impl ScoreboardCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    /// `Ok(None)` when nothing is cached for `date`.
    pub fn read(&self, date: NaiveDate) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(date);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "Cache hit");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    /// Store `bytes` verbatim. Written to a temp file and renamed, so a torn write never reads as a hit.
    pub fn write(&self, date: NaiveDate, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path_for(date);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|source| Error::Io { path: tmp.clone(), source })?;
        if let Err(source) = fs::rename(&tmp, &path) {
            if let Err(e) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %e, "Failed to remove temporary cache file");
            }
            return Err(Error::Io { path, source });
        }
        info!(path = %path.display(), bytes = bytes.len(), "Cached scoreboard");
        Ok(path)
    }
}
