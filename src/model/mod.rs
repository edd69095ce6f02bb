pub mod dataset;
pub mod game;
pub mod scoreboard;

pub use dataset::GameDayDataset;
pub use game::{Count, GameRecord, GameState, GameStatus, LineScore, TeamSide};
