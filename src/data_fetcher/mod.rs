//! Score feed access: HTTP fetch client, wire models and the payload parser.

pub mod client;
pub mod models;
pub mod parser;

pub use client::{FetchResult, ScoreboardClient, TransportError};
pub use models::GameRecord;
pub use parser::{ParseResult, parse};
