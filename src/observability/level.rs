//! Severity levels for bridge transition logs.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Severity at which the dispatch bridge logs each transition.
///
/// Levels are ordered from least to most severe, so a threshold check is
/// `level >= LogLevel::Info`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Fine-grained tracing.
    Trace = 0,
    /// Per-transition detail (the default).
    #[default]
    Debug = 1,
    /// General informational messages.
    Info = 2,
    /// Potentially problematic situations.
    Warn = 3,
    /// Error conditions.
    Error = 4,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [Self; 5] = [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the level name in lowercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns true if this level is at least as severe as `other`.
    #[must_use]
    pub const fn is_at_least(self, other: Self) -> bool {
        self as u8 >= other as u8
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`LogLevel`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?} (expected trace, debug, info, warn or error)")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
