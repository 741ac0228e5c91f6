use serde::Deserialize;

/// Default shown for any text field the feed omits
pub const MISSING_TEXT: &str = "N/A";

/// One game as it appears on the wire. Every field is optional; defaults are
/// applied when converting into a [`GameRecord`].
///
/// Scores are unsigned at the type level: a feed that ships a negative score
/// fails element decoding, which the parser reports as a shape error.
#[derive(Debug, Clone, Deserialize)]
pub struct WireGame {
    #[serde(rename = "homeTeam", default)]
    pub home_team: Option<String>,
    #[serde(rename = "awayTeam", default)]
    pub away_team: Option<String>,
    #[serde(rename = "homeScore", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "awayScore", default)]
    pub away_score: Option<u32>,
    #[serde(rename = "gameStatus", default)]
    pub game_status: Option<String>,
}

/// Fully-decoded game with defaults applied. Built fresh every fetch cycle
/// and discarded after rendering; nothing retains records across cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub status: String,
}

impl From<WireGame> for GameRecord {
    fn from(wire: WireGame) -> Self {
        GameRecord {
            home_team: wire.home_team.unwrap_or_else(|| MISSING_TEXT.to_string()),
            away_team: wire.away_team.unwrap_or_else(|| MISSING_TEXT.to_string()),
            home_score: wire.home_score.unwrap_or(0),
            away_score: wire.away_score.unwrap_or(0),
            status: wire.game_status.unwrap_or_else(|| MISSING_TEXT.to_string()),
        }
    }
}
