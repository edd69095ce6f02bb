use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Top level of `master_scoreboard.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreboardDocument {
    pub data: ScoreboardData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreboardData {
    pub games: GamesBlock,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GamesBlock {
    pub game: GameList,
}

/// The feed collapses a one-game day to a bare object instead of a one-element array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameList {
    Many(Vec<RawGame>),
    One(Box<RawGame>),
}

impl GameList {
    pub fn into_vec(self) -> Vec<RawGame> {
        match self {
            GameList::Many(games) => games,
            GameList::One(game) => vec![*game],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawGame {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub away_team_name: Option<String>,
    #[serde(default)]
    pub home_team_name: Option<String>,
    #[serde(default)]
    pub away_name_abbrev: Option<String>,
    #[serde(default)]
    pub home_name_abbrev: Option<String>,
    #[serde(default)]
    pub home_time: Option<String>,
    #[serde(default)]
    pub hm_lg_ampm: Option<String>,
    #[serde(default)]
    pub status: RawStatus,
    #[serde(default)]
    pub linescore: Option<RawLinescore>,
    #[serde(default)]
    pub pitcher: Option<PlayerRef>,
    #[serde(default)]
    pub batter: Option<PlayerRef>,
    #[serde(default)]
    pub winning_pitcher: Option<PlayerRef>,
    #[serde(default)]
    pub losing_pitcher: Option<PlayerRef>,
    #[serde(default)]
    pub save_pitcher: Option<PlayerRef>,
    #[serde(default)]
    pub away_probable_pitcher: Option<PlayerRef>,
    #[serde(default)]
    pub home_probable_pitcher: Option<PlayerRef>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub inning_state: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub inning: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub b: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub s: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub o: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawLinescore {
    #[serde(default)]
    pub r: Option<RawRuns>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RawRuns {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub away: Option<u32>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub home: Option<u32>,
}

/// A pitcher or batter. Live entries carry `last`, result and probable entries `name_display_roster`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlayerRef {
    #[serde(default)]
    pub name_display_roster: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

impl PlayerRef {
    pub fn display_name(&self) -> Option<String> {
        non_empty(self.name_display_roster.as_deref()).or_else(|| non_empty(self.last.as_deref()))
    }
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

// Counts and runs arrive as strings ("14"), sometimes empty; numbers are accepted too.
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
