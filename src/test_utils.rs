//! Test utilities.
//!
//! Shared helpers for unit and integration tests:
//! - Consistent tracing-based logging initialization
//! - A recording sink for the dispatch bridge
//!
//! # Example
//! ```
//! use progress_state::test_utils::{RecordingSink, init_test_logging};
//! use progress_state::{Action, Progress, Sink};
//!
//! init_test_logging();
//! let mut sink = RecordingSink::<u8, ()>::new();
//! sink.dispatch(Action::new("op", Progress::pending()));
//! assert_eq!(sink.statuses(), ["pending"]);
//! ```

use crate::dispatch::{Action, Extras, Sink};
use crate::types::Progress;
use std::sync::Once;
use tracing_subscriber::fmt::format::FmtSpan;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging with trace-level output.
///
/// Safe to call multiple times; only initializes once.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
///
/// The first call wins; later calls are no-ops.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(false)
            .try_init();
    });
}

/// A sink that keeps every action it receives, in order.
#[derive(Debug)]
pub struct RecordingSink<T, E, X = Extras> {
    actions: Vec<Action<T, E, X>>,
}

impl<T, E, X> RecordingSink<T, E, X> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Returns the recorded actions.
    #[must_use]
    pub fn actions(&self) -> &[Action<T, E, X>] {
        &self.actions
    }

    /// Returns the progress of each recorded action.
    #[must_use]
    pub fn progresses(&self) -> Vec<Progress<T, E>> {
        self.actions.iter().map(|a| a.progress.clone()).collect()
    }

    /// Returns the status tag of each recorded action.
    #[must_use]
    pub fn statuses(&self) -> Vec<&'static str> {
        self.actions
            .iter()
            .map(|a| a.progress.status().as_str())
            .collect()
    }

    /// Consumes the recorder, returning the actions.
    #[must_use]
    pub fn into_actions(self) -> Vec<Action<T, E, X>> {
        self.actions
    }
}

impl<T, E, X> Default for RecordingSink<T, E, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, X> Sink<Action<T, E, X>> for RecordingSink<T, E, X> {
    fn dispatch(&mut self, action: Action<T, E, X>) {
        self.actions.push(action);
    }
}
