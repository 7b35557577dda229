//! Observability settings.
//!
//! Log output itself goes through [`tracing_compat`](crate::tracing_compat);
//! this module holds the level type the bridge configuration refers to.

pub mod level;

pub use level::{LogLevel, ParseLevelError};
