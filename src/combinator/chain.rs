//! Promise-style chaining on progress values.
//!
//! Every combinator dispatches on the tag and short-circuits the states it
//! does not handle: mappers never run on `None` or `Pending`, so a chain of
//! `then` calls over a not-yet-settled value is a no-op that needs no guards.
//!
//! Mapper results go through [`Resolve`], so a mapper may return a plain
//! shared value, a progress (flattened), or a `Result` whose `Err` becomes
//! `Rejected`. A mapper that hands back the payload it was given produces a
//! value that is [`ptr_eq`](Progress::ptr_eq) to the input.

use crate::types::{Progress, Resolve};
use std::sync::Arc;

impl<T, E> Progress<T, E> {
    /// Maps a resolved value. Rejections are carried over unchanged.
    ///
    /// ```
    /// use progress_state::Progress;
    ///
    /// let p: Progress<i32, &str> = Progress::resolve(10);
    /// assert_eq!(p.then(|v| Progress::resolve(*v + 5)), Progress::resolve(15));
    ///
    /// // Handing back the payload keeps the same value.
    /// let p: Progress<Vec<u8>, &str> = Progress::resolve(vec![1, 2]);
    /// assert!(Progress::ptr_eq(&p.clone().then(|v| v), &p));
    /// ```
    pub fn then<U, R, F>(self, on_resolved: F) -> Progress<U, E>
    where
        F: FnOnce(Arc<T>) -> R,
        R: Resolve<U, E>,
    {
        match self {
            Self::Resolved(v) => on_resolved(v).into_progress(),
            Self::Rejected(e) => Progress::Rejected(e),
            Self::None => Progress::None,
            Self::Pending => Progress::Pending,
        }
    }

    /// Maps a resolved value with `on_resolved` or a rejection with
    /// `on_rejected`. The second mapper can recover a rejection into a
    /// resolution.
    ///
    /// ```
    /// use progress_state::Progress;
    ///
    /// let p: Progress<i32, i32> = Progress::reject(10);
    /// let recovered = p.then_with(|r| Progress::resolve(*r + 1), |e| Progress::resolve(*e + 2));
    /// assert_eq!(recovered, Progress::resolve(12));
    /// ```
    pub fn then_with<U, R1, R2, F, G>(self, on_resolved: F, on_rejected: G) -> Progress<U, E>
    where
        F: FnOnce(Arc<T>) -> R1,
        G: FnOnce(Arc<E>) -> R2,
        R1: Resolve<U, E>,
        R2: Resolve<U, E>,
    {
        match self {
            Self::Resolved(v) => on_resolved(v).into_progress(),
            Self::Rejected(e) => on_rejected(e).into_progress(),
            Self::None => Progress::None,
            Self::Pending => Progress::Pending,
        }
    }

    /// Maps a rejection. Every other state is returned unchanged.
    pub fn catch<R, G>(self, on_rejected: G) -> Self
    where
        G: FnOnce(Arc<E>) -> R,
        R: Resolve<T, E>,
    {
        match self {
            Self::Rejected(e) => on_rejected(e).into_progress(),
            other => other,
        }
    }

    /// Runs `on_settled` once the operation has settled, either way.
    ///
    /// The settled payload is not passed in; the supplier's result replaces
    /// it. `None` and `Pending` are returned unchanged.
    pub fn finally<U, R, F>(self, on_settled: F) -> Progress<U, E>
    where
        F: FnOnce() -> R,
        R: Resolve<U, E>,
    {
        match self {
            Self::Resolved(_) | Self::Rejected(_) => on_settled().into_progress(),
            Self::None => Progress::None,
            Self::Pending => Progress::Pending,
        }
    }

    /// Maps a resolved value to a plain value.
    pub fn map<U, F>(self, f: F) -> Progress<U, E>
    where
        F: FnOnce(&T) -> U,
    {
        self.then(|v| Progress::resolve(f(&v)))
    }

    /// Replaces a not-started value with the supplier's result.
    pub fn if_none<R, F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> R,
        R: Resolve<T, E>,
    {
        match self {
            Self::None => supplier().into_progress(),
            other => other,
        }
    }

    /// Replaces an in-flight value with the supplier's result.
    pub fn if_pending<R, F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> R,
        R: Resolve<T, E>,
    {
        match self {
            Self::Pending => supplier().into_progress(),
            other => other,
        }
    }
}
