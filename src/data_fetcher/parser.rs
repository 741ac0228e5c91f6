//! Payload validation and decoding.
//!
//! Pure given its input bytes: no I/O, no state. The result taxonomy keeps a
//! zero-length schedule (`Empty`) distinct from a malformed one (`ShapeError`).

use serde_json::Value;
use tracing::warn;

use super::models::{GameRecord, WireGame};

/// Outcome of decoding one fetched payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// Decoded games in feed order
    Games(Vec<GameRecord>),
    /// Well-formed payload with a `games` array of zero elements
    Empty,
    /// Well-formed JSON, but not an object with a decodable `games` array
    ShapeError,
    /// Payload is not well-formed JSON
    SyntaxError,
}

/// Decodes a raw feed payload into game records.
///
/// Steps: bytes must be well-formed JSON (`SyntaxError` otherwise); the root
/// must be an object carrying a `games` array (`ShapeError` otherwise); an
/// empty array is `Empty`; otherwise every element is decoded with per-field
/// defaults, preserving feed order.
pub fn parse(bytes: &[u8]) -> ParseResult {
    let root: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Feed payload is not well-formed JSON: {e}");
            return ParseResult::SyntaxError;
        }
    };

    let Some(games) = root.get("games").and_then(Value::as_array) else {
        warn!("Feed payload has no games array");
        return ParseResult::ShapeError;
    };

    if games.is_empty() {
        return ParseResult::Empty;
    }

    let mut records = Vec::with_capacity(games.len());
    for element in games {
        match serde_json::from_value::<WireGame>(element.clone()) {
            Ok(wire) => records.push(GameRecord::from(wire)),
            Err(e) => {
                warn!("Undecodable game element in feed: {e}");
                return ParseResult::ShapeError;
            }
        }
    }

    ParseResult::Games(records)
}
