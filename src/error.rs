//! Error types for progress values.
//!
//! Combinators never fail: a failing mapper becomes a `Rejected` value. The
//! only outward errors are:
//!
//! - [`GetError`]: reading the value of a progress that is not resolved
//! - [`DecodeError`]: a serialized record with an unknown or malformed shape
//! - [`ConfigError`]: invalid bridge configuration input

use crate::types::Status;
use core::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error returned by [`Progress::get`](crate::Progress::get).
///
/// A rejection carries the originally captured error allocation, so callers
/// see the exact failure (`Arc::ptr_eq` holds against the source value).
pub enum GetError<E> {
    /// The progress is `None` or `Pending`; there is nothing to read yet.
    Incomplete {
        /// The status at the time of the read.
        status: Status,
    },
    /// The progress is `Rejected`; this is the wrapped error, unchanged.
    Rejected(Arc<E>),
}

impl<E> GetError<E> {
    /// Returns true if the read happened before the operation settled.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }

    /// Returns true if the operation was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns the propagated error, if any.
    #[must_use]
    pub fn into_error(self) -> Option<Arc<E>> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Incomplete { .. } => None,
        }
    }
}

impl<E> Clone for GetError<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Incomplete { status } => Self::Incomplete { status: *status },
            Self::Rejected(e) => Self::Rejected(Arc::clone(e)),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for GetError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { status } => f
                .debug_struct("Incomplete")
                .field("status", status)
                .finish(),
            Self::Rejected(e) => f.debug_tuple("Rejected").field(e).finish(),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for GetError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { status } => write!(f, "progress not completed (status: {status})"),
            Self::Rejected(e) => write!(f, "progress rejected: {e:?}"),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for GetError<E> {}

/// Error decoding a serialized progress record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The `status` tag is not one of the four known variants.
    #[error("unknown Progress variant: {0}")]
    UnknownVariant(String),
    /// The record has no string `status` field.
    #[error("progress record has no string `status` field")]
    MissingStatus,
    /// The tag is known but the payload does not match the expected type.
    #[error("malformed {status} progress record: {source}")]
    Malformed {
        /// Tag of the record being decoded.
        status: Status,
        /// Underlying serde failure.
        #[source]
        source: serde_json::Error,
    },
    /// The input is not valid JSON at all.
    #[error("invalid progress JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Returns true if the failure is an unrecognized tag.
    #[must_use]
    pub const fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant(_))
    }
}

/// Error building a [`BridgeConfig`](crate::config::BridgeConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable or file value could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// Variable or key name.
        var: String,
        /// What was wrong with it.
        reason: String,
    },
    /// The config file could not be read.
    #[error("failed to read config file {path}: {reason}")]
    Io {
        /// Path that was read.
        path: String,
        /// OS error text.
        reason: String,
    },
    /// The config file is not valid TOML for the expected layout.
    #[error("failed to parse TOML config: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn invalid(var: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.to_string(),
            reason: reason.into(),
        }
    }
}
