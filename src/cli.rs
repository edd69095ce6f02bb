use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const DEFAULT_RUNS: &str = "999";
pub const DEFAULT_HOME_TEAM: &str = "CLE";
pub const DEFAULT_BASE_URL: &str = "http://gd2.mlb.com/components/game/mlb";

#[derive(Debug, Clone, Parser)]
#[command(name = "scoreboard")]
/// "Baseball has been berry, berry good to me."
///
/// Prints one team's game, or every game, from the MLB scoreboard for a date. Past scoreboards
/// are kept in a cache directory and read from there on later runs.
pub struct Args {
    /// Date of the games: YYYY-MM-DD, YYYYMMDD, MM/DD/YYYY, today or yesterday. Defaults to
    /// yesterday.
    #[arg(long, short)]
    pub date: Option<String>,

    /// Team of interest, abbreviation or nickname (e.g. CLE, tribe, home). Omit to show all games.
    #[arg(long, short)]
    pub team: Option<String>,

    /// Minimum runs scored by either team in a finished game to mark it with an alert (1-999)
    #[arg(long, short, default_value = DEFAULT_RUNS)]
    pub runs: String,

    /// Cache directory for scoreboard JSON files
    #[arg(long, short, env = "MLB_CACHE_DIR", default_value = ".")]
    pub cache: PathBuf,

    /// Read game data only from the local cache, never from the web
    #[arg(long = "not-from-web", short = 'n', default_value_t = false)]
    pub not_from_web: bool,

    /// Team the `home` nickname refers to
    #[arg(long, env = "MLB_HOME_TEAM", default_value = DEFAULT_HOME_TEAM)]
    pub home_team: String,

    /// Root URL of the scoreboard feed
    #[arg(long, env = "MLB_SCOREBOARD_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}
