//! Four-state lifecycle value for an asynchronous operation.
//!
//! A [`Progress`] is exactly one of:
//!
//! - `None`: the operation has not started
//! - `Pending`: the operation is in flight
//! - `Resolved(T)`: the operation completed with a value
//! - `Rejected(E)`: the operation completed with a failure
//!
//! Values never change in place. A lifecycle (`None -> Pending -> Resolved |
//! Rejected`) is a sequence of distinct values, typically produced by the
//! [dispatch bridge](crate::dispatch).
//!
//! Payloads are reference-counted. Cloning a progress never clones `T` or
//! `E`, and [`Progress::ptr_eq`] tells whether two values share the same
//! payload allocation, which is how combinators signal "nothing changed".

use super::{Resolve, Status};
use crate::error::GetError;
use core::fmt;
use std::sync::Arc;

/// The lifecycle state of an asynchronous operation.
///
/// # Example
///
/// ```
/// use progress_state::Progress;
///
/// let p: Progress<u32, String> = Progress::resolve(10);
/// let q = p.then(|v| Progress::resolve(*v + 5));
/// assert_eq!(q, Progress::resolve(15));
///
/// let waiting: Progress<u32, String> = Progress::pending();
/// assert!(waiting.then(|v| Progress::resolve(*v + 5)).is_pending());
/// ```
pub enum Progress<T, E> {
    /// Not started.
    None,
    /// In flight.
    Pending,
    /// Completed with a value.
    Resolved(Arc<T>),
    /// Completed with a failure.
    Rejected(Arc<E>),
}

impl<T, E> Progress<T, E> {
    /// The shared not-started value.
    pub const NONE: Self = Self::None;

    /// The shared in-flight value.
    pub const PENDING: Self = Self::Pending;

    /// Returns the not-started value.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns the in-flight value.
    #[must_use]
    pub const fn pending() -> Self {
        Self::Pending
    }

    /// Wraps a plain value as `Resolved`.
    #[must_use]
    pub fn resolve(value: T) -> Self {
        Self::Resolved(Arc::new(value))
    }

    /// Wraps an error as `Rejected`.
    ///
    /// The error is opaque: a progress passed here is stored as a payload,
    /// never flattened.
    #[must_use]
    pub fn reject(error: E) -> Self {
        Self::Rejected(Arc::new(error))
    }

    /// Converts a mapper result into a progress value.
    ///
    /// A progress is returned unchanged, so `lift` is idempotent:
    /// `Progress::lift(Progress::resolve(x)) == Progress::resolve(x)`.
    #[must_use]
    pub fn lift<R: Resolve<T, E>>(value: R) -> Self {
        value.into_progress()
    }

    /// Returns the lifecycle tag.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::None => Status::None,
            Self::Pending => Status::Pending,
            Self::Resolved(_) => Status::Resolved,
            Self::Rejected(_) => Status::Rejected,
        }
    }

    /// Returns true if the operation has not started.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if the operation is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the operation completed with a value.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns true if the operation completed with a failure.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns true if the operation settled, either way.
    #[must_use]
    pub const fn is_fulfilled(&self) -> bool {
        self.status().is_fulfilled()
    }

    /// Returns the resolved value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Resolved(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the rejection error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the shared handle to the resolved value, if any.
    #[must_use]
    pub fn shared_value(&self) -> Option<&Arc<T>> {
        match self {
            Self::Resolved(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the shared handle to the rejection error, if any.
    #[must_use]
    pub fn shared_error(&self) -> Option<&Arc<E>> {
        match self {
            Self::Rejected(e) => Some(e),
            _ => None,
        }
    }

    /// Reads the resolved value.
    ///
    /// Check [`is_resolved`](Self::is_resolved) first, or handle the error:
    /// a `Rejected` value yields its original error and a `None`/`Pending`
    /// value yields [`GetError::Incomplete`].
    pub fn get(&self) -> Result<&T, GetError<E>> {
        match self {
            Self::Resolved(v) => Ok(v),
            Self::Rejected(e) => Err(GetError::Rejected(Arc::clone(e))),
            Self::None | Self::Pending => Err(GetError::Incomplete {
                status: self.status(),
            }),
        }
    }

    /// Consumes the progress, returning the shared value or the same error
    /// [`get`](Self::get) would.
    pub fn into_result(self) -> Result<Arc<T>, GetError<E>> {
        match self {
            Self::Resolved(v) => Ok(v),
            Self::Rejected(e) => Err(GetError::Rejected(e)),
            Self::None => Err(GetError::Incomplete {
                status: Status::None,
            }),
            Self::Pending => Err(GetError::Incomplete {
                status: Status::Pending,
            }),
        }
    }

    /// Returns true if `a` and `b` are the same value: same tag and, for
    /// settled values, the same payload allocation.
    ///
    /// `None` and `Pending` carry nothing, so every instance of either is the
    /// same value.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        match (a, b) {
            (Self::None, Self::None) | (Self::Pending, Self::Pending) => true,
            (Self::Resolved(x), Self::Resolved(y)) => Arc::ptr_eq(x, y),
            (Self::Rejected(x), Self::Rejected(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl<T, E> Clone for Progress<T, E> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Pending => Self::Pending,
            Self::Resolved(v) => Self::Resolved(Arc::clone(v)),
            Self::Rejected(e) => Self::Rejected(Arc::clone(e)),
        }
    }
}

impl<T, E> Default for Progress<T, E> {
    fn default() -> Self {
        Self::None
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Progress<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) | (Self::Pending, Self::Pending) => true,
            (Self::Resolved(x), Self::Resolved(y)) => Arc::ptr_eq(x, y) || x == y,
            (Self::Rejected(x), Self::Rejected(y)) => Arc::ptr_eq(x, y) || x == y,
            _ => false,
        }
    }
}

impl<T: Eq, E: Eq> Eq for Progress<T, E> {}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Progress<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Pending => f.write_str("Pending"),
            Self::Resolved(v) => f.debug_tuple("Resolved").field(v).finish(),
            Self::Rejected(e) => f.debug_tuple("Rejected").field(e).finish(),
        }
    }
}

impl<T, E> fmt::Display for Progress<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}

impl<T, E> From<Result<T, E>> for Progress<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::resolve(v),
            Err(e) => Self::reject(e),
        }
    }
}
