use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the scoreboard can report. None of these are turned into an empty result.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad input: command-line values or a payload without the expected shape.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Local-cache-only mode and nothing cached for the date.
    #[error("no cached scoreboard at {}", path.display())]
    CacheMiss { path: PathBuf },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("malformed JSON from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cache I/O on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}
