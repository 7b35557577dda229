//! progress-state: a four-state lifecycle value for asynchronous operations.
//!
//! # Overview
//!
//! A [`Progress`] is an immutable value that is exactly one of `None` (not
//! started), `Pending` (in flight), `Resolved` (completed with a value) or
//! `Rejected` (completed with a failure). Callers build progress values
//! directly, or let the [dispatch bridge](dispatch) report a future's
//! lifecycle as a sequence of actions, then compose them with pure
//! combinators that never need null checks or exception handling.
//!
//! # Core Guarantees
//!
//! - **Exactly one state**: the tag and payload cannot disagree
//! - **Short-circuiting**: mappers never run on `None` or `Pending`
//! - **Failures are values**: a mapper returning `Err` yields `Rejected`
//! - **Worst status wins**: [`all`] reports rejection over in-flight over
//!   not-started over success
//! - **Cheap no-ops**: returning the input payload keeps the same instance
//!   ([`Progress::ptr_eq`])
//!
//! # Module Structure
//!
//! - [`types`]: `Progress`, `Status` and the `Resolve` flattening trait
//! - [`combinator`]: `then`/`catch`/`finally`/`when`, `all`, `race`
//! - [`codec`]: wire record and JSON decoding
//! - [`dispatch`]: `Thunk`, `Sink` and `run_with_dispatch`
//! - [`config`]: bridge configuration (programmatic, env, TOML)
//! - [`error`](mod@error): error types
//! - [`observability`]: log levels for bridge transitions
//! - [`tracing_compat`]: optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use progress_state::{Progress, all};
//!
//! let user: Progress<&str, String> = Progress::resolve("ada");
//! let posts: Progress<&str, String> = Progress::pending();
//!
//! let page = all([user.clone(), posts]);
//! assert!(page.is_pending());
//!
//! let greeting = user.then(|name| Progress::resolve(format!("hello, {name}")));
//! assert_eq!(greeting.value().map(String::as_str), Some("hello, ada"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_inception)]
#![allow(clippy::doc_markdown)]

pub mod codec;
pub mod combinator;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod observability;
pub mod tracing_compat;
pub mod types;

#[cfg(feature = "test-internals")]
pub mod test_utils;

pub use codec::Record;
pub use combinator::{When, all, all2, all3, race};
pub use config::BridgeConfig;
pub use dispatch::{Action, Extras, Sink, Source, Thunk, run_with_dispatch};
pub use error::{ConfigError, DecodeError, GetError};
pub use observability::LogLevel;
pub use types::{Progress, Resolve, Status};
