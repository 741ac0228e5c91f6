//! NBA Scoreboard Library
//!
//! This library provides the data-refresh and render pipeline for a small
//! scoreboard device: a non-blocking refresh scheduler, a one-shot score feed
//! fetch client, a total payload parser, and a bounded formatter that maps
//! every outcome onto a fixed-geometry character display.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nba_scoreboard::config::Config;
//! use nba_scoreboard::data_fetcher::ScoreboardClient;
//! use nba_scoreboard::display::{DisplaySink, PlainSink};
//! use nba_scoreboard::error::AppError;
//! use nba_scoreboard::render::{DisplayLayout, format};
//! use nba_scoreboard::scheduler::run_pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ScoreboardClient::new(&config)?;
//!     let layout = DisplayLayout::from_config(&config);
//!
//!     // One fetch cycle, printed to stdout
//!     let outcome = run_pipeline(&client, true).await;
//!     let lines = format(&outcome, &layout);
//!     PlainSink::stdout().render(&lines, &layout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod logging;
pub mod network;
pub mod render;
pub mod scheduler;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{FetchResult, GameRecord, ParseResult, ScoreboardClient, TransportError, parse};
pub use display::{DisplaySink, PlainSink, TerminalSink};
pub use error::AppError;
pub use network::NetworkStatus;
pub use render::{CycleOutcome, DisplayLayout, RenderLines, format, format_status};
pub use scheduler::{RefreshScheduler, RefreshState, run_pipeline};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
