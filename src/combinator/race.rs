//! Race: surface whichever input has settled.
//!
//! Picks, in argument order:
//!
//! 1. the first settled input (`Resolved` or `Rejected`)
//! 2. otherwise `Pending` if any input is in flight
//! 3. otherwise the first input as given
//! 4. `None` for no inputs

use crate::types::Progress;

/// Returns the first settled progress, falling back to in-flight, then to
/// the first input.
///
/// ```
/// use progress_state::{Progress, race};
///
/// let p: Progress<&str, ()> = race([Progress::pending(), Progress::resolve("x")]);
/// assert_eq!(p, Progress::resolve("x"));
///
/// let p: Progress<&str, ()> = race([Progress::none(), Progress::pending()]);
/// assert!(p.is_pending());
///
/// let p: Progress<&str, ()> = race([]);
/// assert!(p.is_none());
/// ```
pub fn race<T, E, I>(progresses: I) -> Progress<T, E>
where
    I: IntoIterator<Item = Progress<T, E>>,
{
    let mut first = None;
    let mut saw_pending = false;

    for progress in progresses {
        if progress.is_fulfilled() {
            return progress;
        }
        saw_pending |= progress.is_pending();
        if first.is_none() {
            first = Some(progress);
        }
    }

    if saw_pending {
        Progress::Pending
    } else {
        first.unwrap_or(Progress::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    type P = Progress<&'static str, &'static str>;

    #[test]
    fn settled_beats_pending() {
        assert_eq!(race([P::resolve("x"), P::pending()]), P::resolve("x"));
        assert_eq!(race([P::pending(), P::resolve("x")]), P::resolve("x"));
    }

    #[test]
    fn first_settled_wins_even_if_rejected() {
        let out = race([P::none(), P::reject("e"), P::resolve("x")]);
        assert_eq!(out, P::reject("e"));
    }

    #[test]
    fn winner_is_returned_verbatim() {
        let winner = P::resolve("w");
        let out = race([P::pending(), winner.clone()]);
        assert!(P::ptr_eq(&out, &winner));
        assert!(Arc::ptr_eq(
            out.shared_value().expect("resolved"),
            winner.shared_value().expect("resolved"),
        ));
    }

    #[test]
    fn pending_beats_none() {
        assert!(race([P::none(), P::pending()]).is_pending());
    }

    #[test]
    fn only_none_is_none() {
        assert!(race([P::none()]).is_none());
        assert!(race([P::none(), P::none()]).is_none());
    }

    #[test]
    fn empty_is_none() {
        assert!(race(Vec::<P>::new()).is_none());
    }
}
