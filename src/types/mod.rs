//! Core types for progress values.
//!
//! - [`status`]: the four-valued lifecycle tag
//! - [`progress`]: the immutable [`Progress`] value and its accessors
//! - [`resolve`]: the [`Resolve`] conversion every combinator funnels through

pub mod progress;
pub mod resolve;
pub mod status;

pub use progress::Progress;
pub use resolve::Resolve;
pub use status::Status;
