use std::cell::Cell;

use chrono::{Duration, NaiveDate};

use mlb_scoreboard::Error;
use mlb_scoreboard::cache::ScoreboardCache;
use mlb_scoreboard::provider::{GameDataProvider, is_cacheable};
use mlb_scoreboard::request::SourceMode;
use mlb_scoreboard::source::ScoreboardSource;

/// In-memory source that counts how often the network would have been hit.
struct CountingSource {
    body: Vec<u8>,
    calls: Cell<usize>,
    fail: bool,
}

impl CountingSource {
    fn serving(body: &[u8]) -> Self {
        Self { body: body.to_vec(), calls: Cell::new(0), fail: false }
    }

    fn failing() -> Self {
        Self { body: Vec::new(), calls: Cell::new(0), fail: true }
    }
}

impl ScoreboardSource for CountingSource {
    fn url_for(&self, date: NaiveDate) -> String {
        format!("memory://{}", date)
    }

    fn fetch(&self, date: NaiveDate) -> mlb_scoreboard::Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(Error::Network {
                url: self.url_for(date),
                source: ureq::Error::StatusCode(503),
            });
        }
        Ok(self.body.clone())
    }
}

fn sample() -> Vec<u8> {
    std::fs::read("tests/sample_scoreboard.json").expect("failed to read sample_scoreboard.json")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 7, 10).unwrap()
}

#[test]
fn past_date_is_fetched_once_then_served_from_cache() {
    let dir = tempfile::tempdir().unwrap();
    let provider = GameDataProvider::new(CountingSource::serving(&sample()));
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();

    let first = provider.fetch_as_of(date, dir.path(), SourceMode::Remote, today()).unwrap();
    assert_eq!(provider.source().calls.get(), 1);

    let cached = ScoreboardCache::new(dir.path()).path_for(date);
    assert!(cached.ends_with("2017-07-02.json"));
    assert_eq!(std::fs::read(&cached).unwrap(), sample(), "cache holds the raw body verbatim");

    let second = provider.fetch_as_of(date, dir.path(), SourceMode::Remote, today()).unwrap();
    assert_eq!(provider.source().calls.get(), 1, "second fetch must come from the cache");
    assert_eq!(first, second);
}

#[test]
fn today_future_and_yesterday_are_never_cached() {
    let dir = tempfile::tempdir().unwrap();
    let provider = GameDataProvider::new(CountingSource::serving(&sample()));
    let cache = ScoreboardCache::new(dir.path());

    for offset in [-1i64, 0, 1, 30] {
        let date = today() + Duration::days(offset);
        provider.fetch_as_of(date, dir.path(), SourceMode::Remote, today()).unwrap();
        assert!(!cache.contains(date), "{} should not be cached", date);
    }
    assert_eq!(provider.source().calls.get(), 4);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cache_window_starts_two_days_back() {
    assert!(!is_cacheable(today(), today()));
    assert!(!is_cacheable(today() - Duration::days(1), today()));
    assert!(is_cacheable(today() - Duration::days(2), today()));
    assert!(!is_cacheable(today() + Duration::days(1), today()));
}

#[test]
fn local_only_without_file_is_cache_miss() {
    let dir = tempfile::tempdir().unwrap();
    let provider = GameDataProvider::new(CountingSource::serving(&sample()));
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();

    let err = provider.fetch_as_of(date, dir.path(), SourceMode::LocalCacheOnly, today()).unwrap_err();
    match err {
        Error::CacheMiss { path } => assert!(path.ends_with("2017-07-02.json")),
        other => panic!("expected cache miss, got {:?}", other),
    }
    assert_eq!(provider.source().calls.get(), 0);
}

#[test]
fn local_only_reads_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();
    ScoreboardCache::new(dir.path()).write(date, &sample()).unwrap();

    let provider = GameDataProvider::new(CountingSource::failing());
    let dataset = provider.fetch_as_of(date, dir.path(), SourceMode::LocalCacheOnly, today()).unwrap();
    assert_eq!(dataset.len(), 7);
    assert_eq!(provider.source().calls.get(), 0);
}

#[test]
fn remote_mode_prefers_cache_even_for_today() {
    let dir = tempfile::tempdir().unwrap();
    ScoreboardCache::new(dir.path()).write(today(), &sample()).unwrap();

    let provider = GameDataProvider::new(CountingSource::failing());
    let dataset = provider.fetch_as_of(today(), dir.path(), SourceMode::Remote, today()).unwrap();
    assert_eq!(dataset.len(), 7);
    assert_eq!(provider.source().calls.get(), 0);
}

#[test]
fn malformed_cache_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();
    std::fs::write(dir.path().join("2017-07-02.json"), b"{\"data\": {\"games\": ").unwrap();

    let provider = GameDataProvider::new(CountingSource::serving(&sample()));
    for mode in [SourceMode::LocalCacheOnly, SourceMode::Remote] {
        let err = provider.fetch_as_of(date, dir.path(), mode, today()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "got {:?}", err);
    }
    assert_eq!(provider.source().calls.get(), 0);
}

#[test]
fn network_failure_is_reported_once_without_retry() {
    let dir = tempfile::tempdir().unwrap();
    let provider = GameDataProvider::new(CountingSource::failing());
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();

    let err = provider.fetch_as_of(date, dir.path(), SourceMode::Remote, today()).unwrap_err();
    assert!(matches!(err, Error::Network { .. }), "got {:?}", err);
    assert_eq!(provider.source().calls.get(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_remote_body_is_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();

    for body in [&b"null"[..], &b"{\"data\":{\"games\":{}}}"[..], &b"not json"[..]] {
        let provider = GameDataProvider::new(CountingSource::serving(body));
        let err = provider.fetch_as_of(date, dir.path(), SourceMode::Remote, today()).unwrap_err();
        assert!(matches!(err, Error::Validation(_) | Error::Parse { .. }), "got {:?}", err);
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unwritable_cache_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let provider = GameDataProvider::new(CountingSource::serving(&sample()));
    let date = NaiveDate::from_ymd_opt(2017, 7, 2).unwrap();

    let err = provider.fetch_as_of(date, &missing, SourceMode::Remote, today()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "got {:?}", err);
}
