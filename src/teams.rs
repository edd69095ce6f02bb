//! Official team abbreviations and the informal names people type instead.

use crate::error::{Error, Result};

/// Abbreviations as they appear in `home_name_abbrev` / `away_name_abbrev` of the feed.
pub const TEAM_ABBREVS: [&str; 30] = [
    "BOS", "TOR", "CHC", "CIN", "CLE", "DET", "PHI", "NYM", "SF", "PIT", "TB", "BAL", "MIA", "MIL",
    "NYY", "HOU", "TEX", "CWS", "MIN", "KC", "SEA", "LAA", "ATL", "OAK", "COL", "ARI", "LAD", "SD",
    "WSH", "STL",
];

/// Nickname that always means the configured home team.
pub const HOME_NICKNAME: &str = "HOME";

// Keys are uppercase; lookups uppercase their input first.
const TEAM_NICKNAMES: &[(&str, &str)] = &[
    ("TRIBE", "CLE"),
    ("INDIANS", "CLE"),
    ("GUARDIANS", "CLE"),
    ("YANKS", "NYY"),
    ("YANKEES", "NYY"),
    ("METS", "NYM"),
    ("SOX", "BOS"),
    ("REDSOX", "BOS"),
    ("WHITESOX", "CWS"),
    ("CHISOX", "CWS"),
    ("CUBS", "CHC"),
    ("CUBBIES", "CHC"),
    ("REDS", "CIN"),
    ("TIGERS", "DET"),
    ("PHILLIES", "PHI"),
    ("GIANTS", "SF"),
    ("BUCS", "PIT"),
    ("PIRATES", "PIT"),
    ("RAYS", "TB"),
    ("OS", "BAL"),
    ("ORIOLES", "BAL"),
    ("FISH", "MIA"),
    ("MARLINS", "MIA"),
    ("BREWERS", "MIL"),
    ("BREWCREW", "MIL"),
    ("ASTROS", "HOU"),
    ("RANGERS", "TEX"),
    ("TWINS", "MIN"),
    ("ROYALS", "KC"),
    ("MARINERS", "SEA"),
    ("MS", "SEA"),
    ("ANGELS", "LAA"),
    ("HALOS", "LAA"),
    ("BRAVES", "ATL"),
    ("AS", "OAK"),
    ("ATHLETICS", "OAK"),
    ("ROCKIES", "COL"),
    ("DBACKS", "ARI"),
    ("DODGERS", "LAD"),
    ("PADRES", "SD"),
    ("FRIARS", "SD"),
    ("NATS", "WSH"),
    ("NATIONALS", "WSH"),
    ("CARDS", "STL"),
    ("CARDINALS", "STL"),
    ("JAYS", "TOR"),
    ("BLUEJAYS", "TOR"),
];

pub fn is_official(abbrev: &str) -> bool {
    TEAM_ABBREVS.contains(&abbrev)
}

/// Team lookup bound to a home team, so `home` means something.
#[derive(Debug, Clone, Copy)]
pub struct TeamDirectory {
    home: &'static str,
}

impl TeamDirectory {
    /// Build a directory whose `home` nickname points at `home_team`.
    /// The home team must itself be an official abbreviation.
    pub fn with_home(home_team: &str) -> Result<Self> {
        let upper = home_team.trim().to_ascii_uppercase();
        TEAM_ABBREVS
            .iter()
            .find(|a| **a == upper)
            .map(|home| TeamDirectory { home: *home })
            .ok_or_else(|| {
                Error::validation(format!(
                    "home team \"{}\" is not in the official list of team abbreviations",
                    upper
                ))
            })
    }

    pub fn home(&self) -> &'static str {
        self.home
    }

    /// Normalize user input to an official abbreviation.
    /// Official abbreviations win over nicknames; punctuation and spaces in nicknames are ignored.
    pub fn normalize(&self, input: &str) -> Result<&'static str> {
        let upper = input.trim().to_ascii_uppercase();
        if let Some(abbrev) = TEAM_ABBREVS.iter().find(|a| **a == upper) {
            return Ok(*abbrev);
        }

        let squashed: String = upper.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if squashed == HOME_NICKNAME {
            return Ok(self.home);
        }
        TEAM_NICKNAMES
            .iter()
            .find(|(nick, _)| *nick == squashed)
            .map(|(_, abbrev)| *abbrev)
            .ok_or_else(|| Error::validation(format!("unknown team identifier: {}", upper)))
    }
}

