//! Turns a [`GameRecord`] into the text printed for it.
//!
//! With no team filter every game gets one line. With a filter, only the team's games are shown,
//! as a framed block with the status-specific details.

use crate::model::{Count, GameRecord, GameState, LineScore};

pub const ALERT_MARKER: &str = "***";
pub const POSTPONED_MESSAGE: &str = "game postponed";
pub const UNHANDLED_STATUS: &str = "unhandled game status";

const RULE: &str = "-------------------------------";
const MISSING: &str = "--";

/// Text for one game, or an empty string when the filter excludes it.
///
/// `run_threshold` only marks finished games; it never decides whether a game is shown.
pub fn present(game: &GameRecord, team_filter: Option<&str>, run_threshold: u32) -> String {
    let team_view = match team_filter {
        Some(team) if !team.is_empty() => {
            if !game.involves(team) {
                return String::new();
            }
            true
        }
        _ => false,
    };

    match &game.state {
        GameState::Postponed => POSTPONED_MESSAGE.to_string(),
        GameState::Unhandled => UNHANDLED_STATUS.to_string(),
        GameState::Live { score, inning_state, inning, pitcher, batter, count } => {
            let inning_line = match (inning_state, inning) {
                (Some(half), Some(n)) => format!("{} of the {}", half, n),
                (None, Some(n)) => n.to_string(),
                (Some(half), None) => half.clone(),
                (None, None) => MISSING.to_string(),
            };
            if team_view {
                framed(&[
                    scoreline(game, score, " vs. "),
                    format!("{}: {}", game.status.label(), inning_line),
                    format!(
                        "Pitching: {} || Batting: {} || {}",
                        or_missing(pitcher),
                        or_missing(batter),
                        count_line(count)
                    ),
                ])
            } else {
                format!(
                    "{} {}, {}",
                    scoreline(game, score, " vs "),
                    game.status.label(),
                    inning_line
                )
            }
        }
        GameState::Finished { score, winning_pitcher, losing_pitcher, save_pitcher } => {
            let alert = score.max_runs() >= run_threshold;
            let text = if team_view {
                framed(&[
                    scoreline(game, score, " vs. "),
                    format!(
                        "W: {} || L: {} || SV: {}",
                        or_missing(winning_pitcher),
                        or_missing(losing_pitcher),
                        or_missing(save_pitcher)
                    ),
                ])
            } else {
                format!("{} {}", scoreline(game, score, " vs "), game.status.label())
            };
            if alert {
                format!("{} {}", ALERT_MARKER, text)
            } else {
                text
            }
        }
        GameState::Scheduled { away_probable, home_probable } => {
            let start = game.start_time.as_deref().unwrap_or(MISSING);
            let matchup = format!(
                "{} vs {} @ {} {}",
                or_missing(&game.away.name),
                or_missing(&game.home.name),
                or_missing(&game.venue),
                start
            );
            if team_view {
                framed(&[
                    matchup,
                    format!("P: {} || P: {}", or_missing(away_probable), or_missing(home_probable)),
                ])
            } else {
                format!("{} {}", matchup, game.status.label())
            }
        }
    }
}

fn scoreline(game: &GameRecord, score: &LineScore, joiner: &str) -> String {
    format!(
        "{} ({}){}{} ({}) @ {}",
        or_missing(&game.away.name),
        score.away_runs,
        joiner,
        or_missing(&game.home.name),
        score.home_runs,
        or_missing(&game.venue)
    )
}

fn framed(lines: &[String]) -> String {
    let mut out = String::from(RULE);
    for line in lines {
        out.push('\n');
        out.push_str(line);
    }
    out.push('\n');
    out.push_str(RULE);
    out
}

fn count_line(count: &Count) -> String {
    let n = |v: Option<u32>| v.map(|v| v.to_string()).unwrap_or_else(|| MISSING.to_string());
    format!("S: {} B: {} O: {}", n(count.strikes), n(count.balls), n(count.outs))
}

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}
