//! Tracing compatibility layer for structured logging.
//!
//! Works whether or not the `tracing-integration` feature is enabled:
//!
//! - **With feature enabled**: re-exports from the `tracing` crate.
//! - **Without feature**: no-op macros that compile to nothing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use progress_state::tracing_compat::{debug, info};
//!
//! info!(label = "user/fetch", "bridge started");
//! debug!(status = %status, "progress transition");
//! ```
//!
//! # Feature Flag
//!
//! ```toml
//! progress-state = { version = "0.1", features = ["tracing-integration"] }
//! ```

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    //! No-op implementations when tracing is disabled.

    /// No-op trace-level logging macro.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug-level logging macro.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info-level logging macro.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op warn-level logging macro.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// No-op error-level logging macro.
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    pub use crate::{debug, error, info, trace, warn};
}

#[cfg(not(feature = "tracing-integration"))]
pub use noop::*;

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_structured_fields() {
        let label = "user/fetch";
        super::debug!(label = %label, "progress transition");
        super::info!("plain message");
        super::trace!(count = 3, "with a field");
        super::warn!(label, "shorthand field");
        super::error!(error = ?Some(1), "debug field");
    }
}
