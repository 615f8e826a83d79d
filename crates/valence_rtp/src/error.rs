use thiserror::Error;

/// Errors surfaced by the coordination layer.
///
/// Per the error taxonomy in the design notes, almost none of these ever
/// escape a component: they're turned into a user notification and a
/// terminal attempt state by the caller. `RtpError` exists so that call
/// sites can match on *kind* (`no_safe_location` vs `compute_timeout`
/// vs ...) rather than stringly-typed messages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RtpError {
    #[error("store is not running")]
    StoreNotRunning,

    #[error("store operation failed: {0}")]
    Store(#[from] redis::RedisError),

    #[error("failed to encode record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode record: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("no safe location found for world {world}")]
    NoSafeLocation { world: String },

    #[error("compute request timed out")]
    ComputeTimeout,

    #[error("proxy switch was rejected")]
    SwitchRejected,

    #[error("destination world {world} is unknown")]
    UnknownWorld { world: String },

    #[error("pending teleport finalize attempts exhausted")]
    FinalizeAttemptsExhausted,
}

impl RtpError {
    /// The player-facing notification key for this failure, matching the
    /// message keys the collaborator surface is addressed by.
    pub fn notify_key(&self) -> &'static str {
        match self {
            RtpError::NoSafeLocation { .. } => "errors.no-safe-location",
            RtpError::UnknownWorld { .. } => "errors.unknown-world",
            RtpError::FinalizeAttemptsExhausted => "errors.no-safe-location",
            RtpError::StoreNotRunning
            | RtpError::Store(_)
            | RtpError::Encode(_)
            | RtpError::Decode(_)
            | RtpError::ComputeTimeout
            | RtpError::SwitchRejected => "errors.compute-timeout",
        }
    }
}

pub type Result<T> = std::result::Result<T, RtpError>;
