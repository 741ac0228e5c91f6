use thiserror::Error;

/// Infrastructure failures that can abort the process.
///
/// Pipeline outcomes (fetch and parse results) are deliberately *not* part of
/// this enum: they are ordinary values carried through `FetchResult` /
/// `ParseResult` so that the formatter can map every one of them to a
/// display line instead of unwinding past it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Network join failed: {0}")]
    NetworkJoin(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a network join error with context
    pub fn network_join_error(msg: impl Into<String>) -> Self {
        Self::NetworkJoin(msg.into())
    }
}
