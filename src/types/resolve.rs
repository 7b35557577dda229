//! Conversion of mapper results into progress values.
//!
//! A mapper may hand back either a plain value or a progress value. This
//! trait is the single place where that distinction is resolved: a progress
//! value is taken as-is (flattening), a shared payload handle becomes
//! `Resolved` without allocating, and an `Err` becomes `Rejected`.

use super::Progress;
use std::sync::Arc;

/// Anything a combinator mapper may return.
///
/// Implemented for:
///
/// - [`Progress<T, E>`]: returned unchanged, so nested progress never occurs
/// - [`Arc<T>`]: wrapped as `Resolved` around the same allocation
/// - [`Result<R, E>`] where `R: Resolve<T, E>`: `Ok` resolves `R`, `Err`
///   becomes `Rejected`
///
/// Plain values are lifted with [`Progress::resolve`] inside the mapper.
pub trait Resolve<T, E> {
    /// Converts `self` into a progress value.
    fn into_progress(self) -> Progress<T, E>;
}

impl<T, E> Resolve<T, E> for Progress<T, E> {
    #[inline]
    fn into_progress(self) -> Self {
        self
    }
}

impl<T, E> Resolve<T, E> for Arc<T> {
    #[inline]
    fn into_progress(self) -> Progress<T, E> {
        Progress::Resolved(self)
    }
}

impl<T, E, R> Resolve<T, E> for Result<R, E>
where
    R: Resolve<T, E>,
{
    #[inline]
    fn into_progress(self) -> Progress<T, E> {
        match self {
            Ok(r) => r.into_progress(),
            Err(e) => Progress::reject(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_flattened() {
        let p: Progress<i32, &str> = Progress::resolve(3);
        let lifted = Progress::lift(p.clone());
        assert!(Progress::ptr_eq(&lifted, &p));
    }

    #[test]
    fn shared_handle_keeps_allocation() {
        let value = Arc::new(String::from("kept"));
        let p: Progress<String, ()> = Arc::clone(&value).into_progress();
        assert!(Arc::ptr_eq(p.shared_value().expect("resolved"), &value));
    }

    #[test]
    fn err_becomes_rejected() {
        let r: Result<Progress<i32, &str>, &str> = Err("nope");
        let p = r.into_progress();
        assert_eq!(p, Progress::reject("nope"));
    }

    #[test]
    fn ok_progress_is_flattened() {
        let r: Result<Progress<i32, &str>, &str> = Ok(Progress::pending());
        assert!(r.into_progress().is_pending());
    }
}
