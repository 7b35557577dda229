//! Bridging futures into a stream of progress actions.
//!
//! A [`Thunk`] wraps a labelled future. Running it against a [`Sink`]
//! reports the lifecycle as two [`Action`]s (`Pending`, then `Resolved` or
//! `Rejected`) and yields the final [`Progress`](crate::Progress).
//!
//! ```
//! use futures_lite::future::block_on;
//! use progress_state::{Action, Extras, Source, run_with_dispatch};
//!
//! let mut types = Vec::new();
//! let mut sink = |a: Action<(), String>| types.push(a.progress.status());
//! let out = block_on(run_with_dispatch(
//!     "save",
//!     Source::deferred(|| async { Err::<(), _>("read-only".to_string()) }),
//!     Extras::new(),
//!     &mut sink,
//! ));
//! assert!(out.is_rejected());
//! assert_eq!(types.len(), 2);
//! ```

pub mod action;
pub mod bridge;
pub mod sink;

pub use action::{Action, Extras};
pub use bridge::{Source, Thunk, run_with_dispatch};
pub use sink::Sink;
