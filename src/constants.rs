//! Application-wide constants and configuration defaults
//!
//! This module centralizes all magic numbers so the rest of the codebase
//! refers to named values.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default refresh interval between fetch cycles in seconds (5 minutes)
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 300;

/// Display geometry defaults for the attached character panel
pub mod display {
    /// Maximum number of text lines the panel can show at once
    pub const DEFAULT_LINE_BUDGET: usize = 6;

    /// Maximum number of characters per line
    pub const DEFAULT_CHAR_WIDTH: usize = 20;
}

/// How often the main loop polls the refresh scheduler, in milliseconds.
/// The scheduler itself gates on the refresh interval; this only bounds
/// how stale a due tick can get.
pub const SCHEDULER_POLL_MS: u64 = 250;
