use crate::error::{Error, Result};
use crate::model::scoreboard::{PlayerRef, RawGame, non_empty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Preview,
    PreGame,
    InProgress,
    Final,
    GameOver,
    Postponed,
    /// Any label the feed uses that we don't render specially (Delayed, Warmup, ...).
    Unknown(String),
}

impl GameStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Preview" => GameStatus::Preview,
            "Pre-Game" => GameStatus::PreGame,
            "In Progress" => GameStatus::InProgress,
            "Final" => GameStatus::Final,
            "Game Over" => GameStatus::GameOver,
            "Postponed" => GameStatus::Postponed,
            other => GameStatus::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GameStatus::Preview => "Preview",
            GameStatus::PreGame => "Pre-Game",
            GameStatus::InProgress => "In Progress",
            GameStatus::Final => "Final",
            GameStatus::GameOver => "Game Over",
            GameStatus::Postponed => "Postponed",
            GameStatus::Unknown(label) => label,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineScore {
    pub away_runs: u32,
    pub home_runs: u32,
}

impl LineScore {
    pub fn max_runs(&self) -> u32 {
        self.away_runs.max(self.home_runs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Count {
    pub balls: Option<u32>,
    pub strikes: Option<u32>,
    pub outs: Option<u32>,
}

/// Fields that only exist for some statuses. The variant is chosen by [`GameStatus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Scheduled {
        away_probable: Option<String>,
        home_probable: Option<String>,
    },
    Live {
        score: LineScore,
        inning_state: Option<String>,
        inning: Option<u32>,
        pitcher: Option<String>,
        batter: Option<String>,
        count: Count,
    },
    Finished {
        score: LineScore,
        winning_pitcher: Option<String>,
        losing_pitcher: Option<String>,
        save_pitcher: Option<String>,
    },
    Postponed,
    Unhandled,
}

/// Names are only guaranteed for scheduled, live and finished games; postponed and
/// unhandled records may arrive with just a status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamSide {
    pub name: Option<String>,
    pub abbrev: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub id: Option<String>,
    pub away: TeamSide,
    pub home: TeamSide,
    pub venue: Option<String>,
    /// Local start time at the home park, e.g. `7:10PM`.
    pub start_time: Option<String>,
    pub status: GameStatus,
    pub state: GameState,
}

impl GameRecord {
    /// A side with no abbreviation never matches.
    pub fn involves(&self, abbrev: &str) -> bool {
        self.home.abbrev.as_deref() == Some(abbrev) || self.away.abbrev.as_deref() == Some(abbrev)
    }
}

impl TryFrom<RawGame> for GameRecord {
    type Error = Error;

    fn try_from(raw: RawGame) -> Result<Self> {
        let game_id = raw.id.clone().unwrap_or_else(|| "<no id>".to_string());
        let status = GameStatus::from_label(raw.status.status.as_deref().unwrap_or_default());

        let away = TeamSide {
            name: non_empty(raw.away_team_name.as_deref()),
            abbrev: non_empty(raw.away_name_abbrev.as_deref()),
        };
        let home = TeamSide {
            name: non_empty(raw.home_team_name.as_deref()),
            abbrev: non_empty(raw.home_name_abbrev.as_deref()),
        };
        let venue = non_empty(raw.venue.as_deref());

        let needs_matchup = !matches!(status, GameStatus::Postponed | GameStatus::Unknown(_));
        if needs_matchup {
            let identity = [
                ("away_team_name", &away.name),
                ("away_name_abbrev", &away.abbrev),
                ("home_team_name", &home.name),
                ("home_name_abbrev", &home.abbrev),
                ("venue", &venue),
            ];
            if let Some((field, _)) = identity.iter().find(|(_, v)| v.is_none()) {
                return Err(Error::validation(format!(
                    "game {} is {} but is missing {}",
                    game_id,
                    status.label(),
                    field
                )));
            }
        }

        let name = |p: &Option<PlayerRef>| p.as_ref().and_then(PlayerRef::display_name);
        let score = || -> Result<LineScore> {
            let runs = raw.linescore.as_ref().and_then(|l| l.r.as_ref());
            match runs.map(|r| (r.away, r.home)) {
                Some((Some(away_runs), Some(home_runs))) => Ok(LineScore { away_runs, home_runs }),
                _ => Err(Error::validation(format!(
                    "game {} is {} but has no line score",
                    game_id,
                    status.label()
                ))),
            }
        };

        let state = match status {
            GameStatus::Preview | GameStatus::PreGame => GameState::Scheduled {
                away_probable: name(&raw.away_probable_pitcher),
                home_probable: name(&raw.home_probable_pitcher),
            },
            GameStatus::InProgress => GameState::Live {
                score: score()?,
                inning_state: non_empty(raw.status.inning_state.as_deref()),
                inning: raw.status.inning,
                pitcher: name(&raw.pitcher),
                batter: name(&raw.batter),
                count: Count { balls: raw.status.b, strikes: raw.status.s, outs: raw.status.o },
            },
            GameStatus::Final | GameStatus::GameOver => GameState::Finished {
                score: score()?,
                winning_pitcher: name(&raw.winning_pitcher),
                losing_pitcher: name(&raw.losing_pitcher),
                save_pitcher: name(&raw.save_pitcher),
            },
            GameStatus::Postponed => GameState::Postponed,
            GameStatus::Unknown(_) => GameState::Unhandled,
        };

        let start_time = non_empty(raw.home_time.as_deref()).map(|t| {
            let ampm = non_empty(raw.hm_lg_ampm.as_deref()).unwrap_or_default();
            format!("{}{}", t, ampm)
        });

        Ok(GameRecord { id: raw.id, away, home, venue, start_time, status, state })
    }
}
