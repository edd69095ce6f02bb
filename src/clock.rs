use chrono::{NaiveDate, Utc};
use chrono_tz::America::New_York;

/// Today's date on the league calendar. Scoreboard dates are published in US Eastern time.
pub fn league_today() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}
