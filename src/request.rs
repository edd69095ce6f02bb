use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::teams::TeamDirectory;

/// Threshold that no real score reaches; finished games are never marked.
pub const RUNS_DISABLED: u32 = 999;
const RUNS_MIN: u32 = 1;

/// Where the provider may get its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Network, unless the date is already cached.
    Remote,
    /// Cache only; a missing file is an error.
    LocalCacheOnly,
}

/// Validated request. Built once by [`RequestDescriptor::resolve`] and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub date: NaiveDate,
    pub team_filter: Option<&'static str>,
    pub run_threshold: u32,
    pub source_mode: SourceMode,
    pub cache_directory: PathBuf,
    pub base_url: String,
}

impl RequestDescriptor {
    /// Validate raw arguments. `today` anchors the relative date words and the default date.
    /// Fails with [`Error::Validation`] before anything is fetched.
    pub fn resolve(args: &Args, today: NaiveDate) -> Result<Self> {
        let teams = TeamDirectory::with_home(&args.home_team)?;

        let date = match args.date.as_deref() {
            Some(raw) => parse_date(raw, today)?,
            None => today - Duration::days(1),
        };
        let team_filter = args
            .team
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| teams.normalize(t))
            .transpose()?;
        let run_threshold = parse_runs(&args.runs)?;
        let cache_directory = check_cache_dir(&args.cache)?;
        let source_mode = if args.not_from_web {
            SourceMode::LocalCacheOnly
        } else {
            SourceMode::Remote
        };

        let descriptor = RequestDescriptor {
            date,
            team_filter,
            run_threshold,
            source_mode,
            cache_directory,
            base_url: args.base_url.trim_end_matches('/').to_string(),
        };
        debug!(?descriptor, "Resolved request");
        Ok(descriptor)
    }
}

/// Accepts ISO dates, compact `YYYYMMDD`, US `MM/DD/YYYY`, and `today`/`yesterday`.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate> {
    let s = raw.trim();
    match s.to_ascii_lowercase().as_str() {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }
    for pat in ["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, pat) {
            return Ok(date);
        }
    }
    Err(Error::validation(format!("could not parse date \"{}\"", s)))
}

pub fn parse_runs(raw: &str) -> Result<u32> {
    let value: u32 = raw.trim().parse().map_err(|e| {
        Error::validation(format!("minimum runs could not be converted from \"{}\": {}", raw, e))
    })?;
    if !(RUNS_MIN..=RUNS_DISABLED).contains(&value) {
        return Err(Error::validation(format!(
            "minimum runs has to be {} <= r <= {}, got {}",
            RUNS_MIN, RUNS_DISABLED, value
        )));
    }
    Ok(value)
}

fn check_cache_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_dir() {
        Ok(dir.to_path_buf())
    } else {
        Err(Error::validation(format!(
            "\"{}\" does not exist as local cache dir",
            dir.display()
        )))
    }
}
