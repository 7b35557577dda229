//! The dispatch bridge: turns one future's settlement into a sequence of
//! actions.
//!
//! Calling [`Thunk::run`] (or [`run_with_dispatch`]):
//!
//! 1. dispatches `{ ...extras, type: label, progress: Pending }` immediately,
//!    before returning
//! 2. obtains the future, invoking the deferred constructor if one was given
//! 3. returns a future that awaits settlement, dispatches the terminal
//!    `Resolved` or `Rejected` action and yields that same progress
//!
//! Failures are not re-raised: the caller inspects the returned progress.
//! There is no retry, timeout or cancellation; dropping the returned future
//! before it completes means no terminal action is dispatched.

use super::action::{Action, Extras};
use super::sink::Sink;
use crate::config::BridgeConfig;
use crate::observability::LogLevel;
use crate::tracing_compat::{debug, error, info, trace, warn};
use crate::types::{Progress, Status};
use core::fmt;
use std::future::Future;

/// Where the bridged future comes from.
pub enum Source<F, G = fn() -> F> {
    /// An already constructed future.
    Ready(F),
    /// A constructor invoked once, after the `Pending` action is dispatched.
    Deferred(G),
}

impl<F> Source<F> {
    /// Wraps a ready future.
    pub fn ready(future: F) -> Self {
        Self::Ready(future)
    }
}

impl<F, G> Source<F, G>
where
    G: FnOnce() -> F,
{
    /// Wraps a constructor that produces the future on demand.
    pub fn deferred(make: G) -> Self {
        Self::Deferred(make)
    }

    /// Obtains the future, running the constructor if needed.
    pub fn into_future(self) -> F {
        match self {
            Self::Ready(future) => future,
            Self::Deferred(make) => make(),
        }
    }

    /// Returns true if the future is constructed lazily.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<F, G> fmt::Debug for Source<F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(_) => f.write_str("Source::Ready(..)"),
            Self::Deferred(_) => f.write_str("Source::Deferred(..)"),
        }
    }
}

/// A bridge invocation that has been built but not started.
///
/// ```
/// use futures_lite::future::block_on;
/// use progress_state::{Action, Progress, Source, Thunk};
///
/// let mut log = Vec::new();
/// let mut sink = |a: Action<u32, String>| log.push(a.progress);
///
/// let thunk = Thunk::new("answer", Source::ready(async { Ok::<_, String>(42) }));
/// let last = block_on(thunk.run(&mut sink));
///
/// assert_eq!(last, Progress::resolve(42));
/// assert_eq!(log, [Progress::pending(), Progress::resolve(42)]);
/// ```
pub struct Thunk<F, G = fn() -> F, X = Extras> {
    label: String,
    source: Source<F, G>,
    extras: X,
    config: BridgeConfig,
}

impl<F, G> Thunk<F, G> {
    /// Creates a thunk with empty extras and default configuration.
    pub fn new(label: impl Into<String>, source: Source<F, G>) -> Self {
        Self {
            label: label.into(),
            source,
            extras: Extras::new(),
            config: BridgeConfig::default(),
        }
    }
}

impl<F, G, X> Thunk<F, G, X> {
    /// Replaces the extras merged into every action.
    #[must_use]
    pub fn with_extras<Y>(self, extras: Y) -> Thunk<F, G, Y> {
        Thunk {
            label: self.label,
            source: self.source,
            extras,
            config: self.config,
        }
    }

    /// Replaces the bridge configuration.
    #[must_use]
    pub fn with_config(mut self, config: BridgeConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the label, without any configured prefix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Starts the bridge.
    ///
    /// The `Pending` action (unless disabled in the configuration) is
    /// dispatched and a deferred source is invoked before this returns. The
    /// returned future completes with the terminal progress after
    /// dispatching it.
    pub fn run<T, E, S>(self, sink: &mut S) -> impl Future<Output = Progress<T, E>>
    where
        F: Future<Output = Result<T, E>>,
        G: FnOnce() -> F,
        X: Clone,
        S: Sink<Action<T, E, X>>,
    {
        let Self {
            label,
            source,
            extras,
            config,
        } = self;
        let kind = config.action_type(&label);
        let level = config.transition_level;

        if config.emit_pending {
            log_transition(level, &kind, Status::Pending);
            sink.dispatch(Action::with_extras(
                kind.clone(),
                Progress::PENDING,
                extras.clone(),
            ));
        }
        let future = source.into_future();

        async move {
            let progress = Progress::from(future.await);
            log_transition(level, &kind, progress.status());
            sink.dispatch(Action::with_extras(kind, progress.clone(), extras));
            progress
        }
    }
}

impl<F, G, X: fmt::Debug> fmt::Debug for Thunk<F, G, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk")
            .field("label", &self.label)
            .field("source", &self.source)
            .field("extras", &self.extras)
            .field("config", &self.config)
            .finish()
    }
}

/// Runs `source` through the bridge, reporting transitions to `sink`.
///
/// Equivalent to `Thunk::new(label, source).with_extras(extras).run(sink)`.
pub fn run_with_dispatch<T, E, F, G, X, S>(
    label: impl Into<String>,
    source: Source<F, G>,
    extras: X,
    sink: &mut S,
) -> impl Future<Output = Progress<T, E>>
where
    F: Future<Output = Result<T, E>>,
    G: FnOnce() -> F,
    X: Clone,
    S: Sink<Action<T, E, X>>,
{
    Thunk::new(label, source).with_extras(extras).run(sink)
}

#[cfg_attr(not(feature = "tracing-integration"), allow(unused_variables))]
fn log_transition(level: LogLevel, kind: &str, status: Status) {
    match level {
        LogLevel::Trace => {
            trace!(action = kind, status = %status, "progress transition");
        }
        LogLevel::Debug => {
            debug!(action = kind, status = %status, "progress transition");
        }
        LogLevel::Info => {
            info!(action = kind, status = %status, "progress transition");
        }
        LogLevel::Warn => {
            warn!(action = kind, status = %status, "progress transition");
        }
        LogLevel::Error => {
            error!(action = kind, status = %status, "progress transition");
        }
    }
}
