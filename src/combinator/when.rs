//! Pattern-style fold over the four states.
//!
//! [`When`] collects up to one handler per state. [`Progress::when`] runs
//! the handler matching the current tag; if that handler is absent the
//! value is returned unchanged, so partial matchers are fine.

use crate::types::{Progress, Resolve, Status};
use core::fmt;
use std::sync::Arc;

type Supplier<'a, T, E> = Box<dyn FnOnce() -> Progress<T, E> + 'a>;
type Mapper<'a, A, T, E> = Box<dyn FnOnce(Arc<A>) -> Progress<T, E> + 'a>;

/// A partial matcher for [`Progress::when`].
///
/// ```
/// use progress_state::{Progress, When};
///
/// let p: Progress<String, String> = Progress::pending();
/// let shown = p.when(
///     When::new()
///         .pending(|| Progress::resolve("loading".to_string()))
///         .rejected(|e| Progress::resolve(format!("failed: {e}"))),
/// );
/// assert_eq!(shown, Progress::resolve("loading".to_string()));
/// ```
pub struct When<'a, T, E> {
    none: Option<Supplier<'a, T, E>>,
    pending: Option<Supplier<'a, T, E>>,
    resolved: Option<Mapper<'a, T, T, E>>,
    rejected: Option<Mapper<'a, E, T, E>>,
}

impl<'a, T, E> When<'a, T, E> {
    /// Creates a matcher with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            none: None,
            pending: None,
            resolved: None,
            rejected: None,
        }
    }

    /// Sets the handler for `None`.
    #[must_use]
    pub fn none<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> R + 'a,
        R: Resolve<T, E>,
    {
        self.none = Some(Box::new(move || f().into_progress()));
        self
    }

    /// Sets the handler for `Pending`.
    #[must_use]
    pub fn pending<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> R + 'a,
        R: Resolve<T, E>,
    {
        self.pending = Some(Box::new(move || f().into_progress()));
        self
    }

    /// Sets the handler for `Resolved`.
    #[must_use]
    pub fn resolved<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce(Arc<T>) -> R + 'a,
        R: Resolve<T, E>,
    {
        self.resolved = Some(Box::new(move |v| f(v).into_progress()));
        self
    }

    /// Sets the handler for `Rejected`.
    #[must_use]
    pub fn rejected<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce(Arc<E>) -> R + 'a,
        R: Resolve<T, E>,
    {
        self.rejected = Some(Box::new(move |e| f(e).into_progress()));
        self
    }

    /// Returns true if a handler is set for `status`.
    #[must_use]
    pub fn handles(&self, status: Status) -> bool {
        match status {
            Status::None => self.none.is_some(),
            Status::Pending => self.pending.is_some(),
            Status::Resolved => self.resolved.is_some(),
            Status::Rejected => self.rejected.is_some(),
        }
    }
}

impl<T, E> Default for When<'_, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for When<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("none", &self.none.is_some())
            .field("pending", &self.pending.is_some())
            .field("resolved", &self.resolved.is_some())
            .field("rejected", &self.rejected.is_some())
            .finish()
    }
}

impl<T, E> Progress<T, E> {
    /// Runs the handler in `matcher` for the current state.
    ///
    /// The handler's result is flattened through [`Resolve`]. With no
    /// handler for the current state, `self` is returned unchanged, which is
    /// why the result keeps the type `Progress<T, E>`. Use
    /// [`then`](Progress::then) or [`then_with`](Progress::then_with) to
    /// change the value type.
    pub fn when(self, matcher: When<'_, T, E>) -> Self {
        match self {
            Self::None => match matcher.none {
                Some(f) => f(),
                None => self,
            },
            Self::Pending => match matcher.pending {
                Some(f) => f(),
                None => self,
            },
            Self::Resolved(v) => match matcher.resolved {
                Some(f) => f(v),
                None => Self::Resolved(v),
            },
            Self::Rejected(e) => match matcher.rejected {
                Some(f) => f(e),
                None => Self::Rejected(e),
            },
        }
    }
}
