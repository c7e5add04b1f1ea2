//! Error types for startup configuration.
//!
//! Runtime gesture processing never fails: degenerate input is skipped for the
//! tick. Only loading the effect configuration can go wrong.

use thiserror::Error;

/// Errors raised while loading or validating an `FxConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// One of the three effect slots is absent or has an empty name.
    #[error("missing effect configuration for slot '{slot}'")]
    MissingEffect {
        /// The slot name ("explosion", "vortex" or "trail").
        slot: &'static str,
    },

    /// A tuning value is out of range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}
