//! Aggregation: combine many progress values into one.
//!
//! # Precedence
//!
//! Scanning the inputs left to right, the first rule that matches wins:
//!
//! 1. any `Rejected` -> the first rejection, with its original error
//! 2. any `Pending` -> `Pending`
//! 3. any `None` -> `None`
//! 4. all `Resolved` -> `Resolved` with the values in input order
//!
//! Failure dominates in-flight work, which dominates not-started work,
//! which dominates success. No inputs resolve to an empty sequence.

use crate::types::Progress;
use std::sync::Arc;

/// Combines progress values of one type into a progress of their values.
///
/// ```
/// use progress_state::{Progress, all};
///
/// let ok: Progress<Vec<char>, &str> =
///     all([Progress::resolve('a'), Progress::resolve('b'), Progress::resolve('c')]);
/// assert_eq!(ok, Progress::resolve(vec!['a', 'b', 'c']));
///
/// let waiting: Progress<Vec<char>, &str> =
///     all([Progress::resolve('a'), Progress::pending(), Progress::none()]);
/// assert!(waiting.is_pending());
/// ```
pub fn all<T, E, I>(progresses: I) -> Progress<Vec<T>, E>
where
    T: Clone,
    I: IntoIterator<Item = Progress<T, E>>,
{
    let mut values = Vec::new();
    let mut saw_pending = false;
    let mut saw_none = false;

    for progress in progresses {
        match progress {
            Progress::Rejected(e) => return Progress::Rejected(e),
            Progress::Pending => saw_pending = true,
            Progress::None => saw_none = true,
            Progress::Resolved(v) => {
                if !saw_pending && !saw_none {
                    values.push(Arc::unwrap_or_clone(v));
                }
            }
        }
    }

    if saw_pending {
        Progress::Pending
    } else if saw_none {
        Progress::None
    } else {
        Progress::resolve(values)
    }
}

/// Combines two progress values of different types.
///
/// Same precedence as [`all`]; the first argument's rejection wins a tie.
pub fn all2<A, B, E>(a: Progress<A, E>, b: Progress<B, E>) -> Progress<(A, B), E>
where
    A: Clone,
    B: Clone,
{
    match (a, b) {
        (Progress::Rejected(e), _) | (_, Progress::Rejected(e)) => Progress::Rejected(e),
        (Progress::Resolved(a), Progress::Resolved(b)) => {
            Progress::resolve((Arc::unwrap_or_clone(a), Arc::unwrap_or_clone(b)))
        }
        (Progress::Pending, _) | (_, Progress::Pending) => Progress::Pending,
        _ => Progress::None,
    }
}

/// Combines three progress values of different types.
///
/// Same precedence as [`all`], scanning `a`, `b`, `c` in order.
pub fn all3<A, B, C, E>(
    a: Progress<A, E>,
    b: Progress<B, E>,
    c: Progress<C, E>,
) -> Progress<(A, B, C), E>
where
    A: Clone,
    B: Clone,
    C: Clone,
{
    match (a, b, c) {
        (Progress::Rejected(e), _, _)
        | (_, Progress::Rejected(e), _)
        | (_, _, Progress::Rejected(e)) => Progress::Rejected(e),
        (Progress::Resolved(a), Progress::Resolved(b), Progress::Resolved(c)) => Progress::resolve((
            Arc::unwrap_or_clone(a),
            Arc::unwrap_or_clone(b),
            Arc::unwrap_or_clone(c),
        )),
        (Progress::Pending, _, _) | (_, Progress::Pending, _) | (_, _, Progress::Pending) => {
            Progress::Pending
        }
        _ => Progress::None,
    }
}
