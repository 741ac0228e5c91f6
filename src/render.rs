//! Bounded formatting of a cycle outcome into display lines.
//!
//! The formatter is total: every fetch or parse outcome, including every
//! error kind, maps to at least one visible line. Nothing reaches the display
//! blank.

use crate::config::Config;
use crate::data_fetcher::{GameRecord, ParseResult, TransportError};

/// Fixed geometry of the attached character display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    /// Maximum lines shown at once
    pub line_budget: usize,
    /// Maximum characters per line
    pub char_width: usize,
}

impl DisplayLayout {
    pub fn new(line_budget: usize, char_width: usize) -> Self {
        DisplayLayout {
            line_budget,
            char_width,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        DisplayLayout::new(config.line_budget, config.char_width)
    }
}

/// Ordered display lines, regenerated whole every cycle.
///
/// Only constructible inside this module, so holding one guarantees the
/// geometry invariants: at most `line_budget` lines, each at most
/// `char_width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLines {
    lines: Vec<String>,
}

impl RenderLines {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Everything one fetch cycle can produce, as seen by the formatter.
#[derive(Debug, Clone)]
pub enum CycleOutcome {
    /// Network was down; no fetch was attempted
    Connectivity,
    /// Fetch reached the network but failed
    Transport(TransportError),
    /// Fetch succeeded; here is what the parser made of the payload
    Parsed(ParseResult),
}

/// Drops everything past `width` characters. Never wraps.
fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Maps a cycle outcome to bounded display lines.
///
/// Game records emit two lines each, `"{away} vs {home}"` then
/// `"Score: {away}-{home}"`, in feed order; records that no longer fit the
/// line budget are silently dropped rather than wrapped or paginated.
pub fn format(outcome: &CycleOutcome, layout: &DisplayLayout) -> RenderLines {
    let width = layout.char_width;

    let mut lines = match outcome {
        CycleOutcome::Connectivity => vec![clip("WiFi not connected", width)],
        CycleOutcome::Transport(err) => vec![clip(&format!("Fetch failed: {err}"), width)],
        CycleOutcome::Parsed(ParseResult::SyntaxError) => vec![clip("Parse failed", width)],
        CycleOutcome::Parsed(ParseResult::ShapeError) => vec![clip("Bad feed format", width)],
        CycleOutcome::Parsed(ParseResult::Empty) => vec![clip("No games scheduled.", width)],
        CycleOutcome::Parsed(ParseResult::Games(records)) => {
            format_games(records, layout)
        }
    };

    lines.truncate(layout.line_budget);
    RenderLines { lines }
}

fn format_games(records: &[GameRecord], layout: &DisplayLayout) -> Vec<String> {
    let mut lines = Vec::new();
    for record in records {
        // Two lines per record; a record that would overflow is dropped whole
        if lines.len() + 2 > layout.line_budget {
            // A display too small for one full record still shows the first
            // matchup rather than nothing
            if lines.is_empty() && layout.line_budget >= 1 {
                lines.push(clip(
                    &format!("{} vs {}", record.away_team, record.home_team),
                    layout.char_width,
                ));
            }
            break;
        }
        lines.push(clip(
            &format!("{} vs {}", record.away_team, record.home_team),
            layout.char_width,
        ));
        lines.push(clip(
            &format!("Score: {}-{}", record.away_score, record.home_score),
            layout.char_width,
        ));
    }
    lines
}

/// Clips and bounds free-form status messages (startup banners) to the
/// display geometry, outside any fetch cycle.
pub fn format_status(messages: &[String], layout: &DisplayLayout) -> RenderLines {
    let lines = messages
        .iter()
        .take(layout.line_budget)
        .map(|m| clip(m, layout.char_width))
        .collect();
    RenderLines { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> DisplayLayout {
        DisplayLayout::new(6, 20)
    }

    fn record(away: &str, home: &str, away_score: u32, home_score: u32) -> GameRecord {
        GameRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score,
            away_score,
            status: "Final".to_string(),
        }
    }

    fn assert_within_geometry(lines: &RenderLines, layout: &DisplayLayout) {
        assert!(lines.len() <= layout.line_budget);
        for line in lines.lines() {
            assert!(line.chars().count() <= layout.char_width);
        }
    }

    #[test]
    fn test_single_game_formats_two_lines() {
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![record(
            "Celtics", "Lakers", 99, 101,
        )]));
        let lines = format(&outcome, &layout());

        assert_eq!(
            lines.lines(),
            &["Celtics vs Lakers".to_string(), "Score: 99-101".to_string()]
        );
    }

    #[test]
    fn test_two_games_fill_four_lines() {
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![
            record("Celtics", "Lakers", 99, 101),
            record("Suns", "Nuggets", 110, 115),
        ]));
        let lines = format(&outcome, &layout());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines.lines()[2], "Suns vs Nuggets");
        assert_eq!(lines.lines()[3], "Score: 110-115");
    }

    #[test]
    fn test_records_past_line_budget_are_dropped_whole() {
        let tight = DisplayLayout::new(2, 20);
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![
            record("Celtics", "Lakers", 99, 101),
            record("Suns", "Nuggets", 110, 115),
        ]));
        let lines = format(&outcome, &tight);

        // Second record dropped, never a dangling matchup line
        assert_eq!(
            lines.lines(),
            &["Celtics vs Lakers".to_string(), "Score: 99-101".to_string()]
        );
    }

    #[test]
    fn test_budget_of_one_still_shows_first_matchup() {
        let tiny = DisplayLayout::new(1, 20);
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![
            record("Celtics", "Lakers", 99, 101),
            record("Suns", "Nuggets", 110, 115),
        ]));
        let lines = format(&outcome, &tiny);

        assert_eq!(lines.lines(), &["Celtics vs Lakers".to_string()]);
    }

    #[test]
    fn test_odd_budget_never_splits_a_record() {
        let odd = DisplayLayout::new(3, 20);
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![
            record("Celtics", "Lakers", 99, 101),
            record("Suns", "Nuggets", 110, 115),
        ]));
        let lines = format(&outcome, &odd);

        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_long_team_names_are_clipped_not_wrapped() {
        let outcome = CycleOutcome::Parsed(ParseResult::Games(vec![record(
            "Harlem Globetrotters International",
            "Washington Generals Travelling Squad",
            88,
            104,
        )]));
        let lines = format(&outcome, &layout());

        assert_within_geometry(&lines, &layout());
        assert_eq!(lines.lines()[0], "Harlem Globetrotters");
    }

    #[test]
    fn test_every_outcome_variant_stays_within_geometry() {
        let outcomes = vec![
            CycleOutcome::Connectivity,
            CycleOutcome::Transport(TransportError::Status(503)),
            CycleOutcome::Transport(TransportError::Timeout),
            CycleOutcome::Transport(TransportError::Connection("refused".to_string())),
            CycleOutcome::Parsed(ParseResult::SyntaxError),
            CycleOutcome::Parsed(ParseResult::ShapeError),
            CycleOutcome::Parsed(ParseResult::Empty),
            CycleOutcome::Parsed(ParseResult::Games(vec![
                record(
                    "An Adversarially Long Away Team Name",
                    "An Equally Long Home Team Name",
                    2_000_000_000,
                    2_000_000_001,
                );
                10
            ])),
        ];

        for outcome in &outcomes {
            let lines = format(outcome, &layout());
            assert!(!lines.is_empty(), "formatter must be total: {outcome:?}");
            assert_within_geometry(&lines, &layout());
        }
    }

    #[test]
    fn test_error_categories_are_distinguishable() {
        let l = layout();
        let fetch = format(&CycleOutcome::Transport(TransportError::Status(500)), &l);
        let parse = format(&CycleOutcome::Parsed(ParseResult::SyntaxError), &l);
        let shape = format(&CycleOutcome::Parsed(ParseResult::ShapeError), &l);

        assert!(fetch.lines()[0].starts_with("Fetch failed"));
        assert_eq!(parse.lines()[0], "Parse failed");
        assert_eq!(shape.lines()[0], "Bad feed format");
        assert_ne!(fetch.lines()[0], parse.lines()[0]);
        assert_ne!(parse.lines()[0], shape.lines()[0]);
    }

    #[test]
    fn test_empty_schedule_message() {
        let lines = format(&CycleOutcome::Parsed(ParseResult::Empty), &layout());
        assert_eq!(lines.lines(), &["No games scheduled.".to_string()]);
    }

    #[test]
    fn test_connectivity_line_fits_width() {
        let lines = format(&CycleOutcome::Connectivity, &layout());
        assert_eq!(lines.len(), 1);
        assert!(lines.lines()[0].chars().count() <= 20);
    }

    #[test]
    fn test_status_banner_is_clipped_and_bounded() {
        let messages = vec![
            "WiFi Connected!".to_string(),
            "IP: 192.168.1.50 (wireless interface)".to_string(),
        ];
        let lines = format_status(&messages, &layout());

        assert_eq!(lines.len(), 2);
        assert_eq!(lines.lines()[1], "IP: 192.168.1.50 (wi");
    }

    #[test]
    fn test_status_banner_respects_line_budget() {
        let messages: Vec<String> = (0..10).map(|i| format!("line {i}")).collect();
        let lines = format_status(&messages, &layout());
        assert_eq!(lines.len(), 6);
    }
}
