//! Cooperative refresh scheduling.
//!
//! The main loop polls [`RefreshScheduler::tick`] once per iteration; a due
//! tick launches one fetch→parse→format→paint cycle which runs to completion
//! before the loop continues. At most one cycle is ever in flight.

use std::time::{Duration, Instant};
use tracing::{info, instrument};

use crate::data_fetcher::{FetchResult, ScoreboardClient, parse};
use crate::display::DisplaySink;
use crate::error::AppError;
use crate::render::{CycleOutcome, DisplayLayout, format};

/// Process-wide refresh state, owned and mutated only by the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct RefreshState {
    /// Set once from the startup join probe, never revisited in-loop
    pub connected: bool,
    /// Stamped when a cycle is launched, not when it completes
    pub last_fire: Option<Instant>,
}

impl RefreshState {
    pub fn new(connected: bool) -> Self {
        RefreshState {
            connected,
            last_fire: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Cycling,
}

/// Interval-gated two-state (Idle/Cycling) refresh machine.
#[derive(Debug)]
pub struct RefreshScheduler {
    interval: Duration,
    state: RefreshState,
    phase: Phase,
}

impl RefreshScheduler {
    pub fn new(interval: Duration, connected: bool) -> Self {
        RefreshScheduler {
            interval,
            state: RefreshState::new(connected),
            phase: Phase::Idle,
        }
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    /// Decides whether a cycle is due at `now`.
    ///
    /// Fires when connected and at least one interval has passed since the
    /// last launch; the first tick after startup fires immediately. On fire,
    /// `last_fire` is stamped to `now` so a slow cycle anchors the next
    /// window to its own start rather than compounding delay. While
    /// disconnected nothing happens and the stamp is left untouched.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle || !self.state.connected {
            return false;
        }

        let due = match self.state.last_fire {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };

        if due {
            self.state.last_fire = Some(now);
            self.phase = Phase::Cycling;
        }
        due
    }

    /// Runs one complete cycle and paints the result. Must follow a `tick`
    /// that returned true; returns the scheduler to Idle unconditionally once
    /// the sink call comes back.
    #[instrument(skip(self, client, sink))]
    pub async fn run_cycle(
        &mut self,
        client: &ScoreboardClient,
        layout: &DisplayLayout,
        sink: &mut dyn DisplaySink,
    ) -> Result<(), AppError> {
        let outcome = run_pipeline(client, self.state.connected).await;
        let lines = format(&outcome, layout);
        info!("Cycle produced {} display line(s)", lines.len());
        let painted = sink.render(&lines, layout);
        self.phase = Phase::Idle;
        painted
    }
}

/// One fetch→parse pass. The connectivity precondition belongs to the caller:
/// when disconnected a `Connectivity` result is synthesized without any
/// network I/O.
pub async fn run_pipeline(client: &ScoreboardClient, connected: bool) -> CycleOutcome {
    let fetched = if connected {
        client.fetch().await
    } else {
        FetchResult::Connectivity
    };

    match fetched {
        FetchResult::Success(body) => CycleOutcome::Parsed(parse(&body)),
        FetchResult::Connectivity => CycleOutcome::Connectivity,
        FetchResult::Transport(err) => CycleOutcome::Transport(err),
    }
}
