use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::game::GameRecord;
use crate::model::scoreboard::ScoreboardDocument;

/// All games for one date, in feed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameDayDataset {
    games: Vec<GameRecord>,
}

impl GameDayDataset {
    /// Parse raw scoreboard bytes. `origin` (URL or cache path) only feeds error messages.
    ///
    /// Not JSON is [`Error::Parse`]; JSON without `data.games.game` or with an incomplete game is
    /// [`Error::Validation`].
    pub fn from_slice(bytes: &[u8], origin: &str) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|source| Error::Parse {
            origin: origin.to_string(),
            source,
        })?;
        check_shape(&value)?;

        let has_game_path = value
            .pointer("/data/games/game")
            .is_some_and(|g| g.is_array() || g.is_object());
        if !has_game_path {
            return Err(Error::validation(format!("{} has no data.games.game", origin)));
        }

        let doc: ScoreboardDocument = serde_json::from_value(value).map_err(|e| {
            Error::validation(format!("unexpected scoreboard layout in {}: {}", origin, e))
        })?;
        let games = doc
            .data
            .games
            .game
            .into_vec()
            .into_iter()
            .map(GameRecord::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(origin, games = games.len(), "Parsed scoreboard");
        Ok(GameDayDataset { games })
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Coarse top-level check: a non-empty object holding a `data` object.
pub fn check_shape(value: &Value) -> Result<()> {
    match value {
        Value::Object(map) if !map.is_empty() && map.get("data").is_some_and(Value::is_object) => {
            Ok(())
        }
        Value::Null => Err(Error::validation("scoreboard body is null")),
        _ => Err(Error::validation(
            "scoreboard body is not an object with a data section",
        )),
    }
}
