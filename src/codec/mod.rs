//! Serialization of progress values.
//!
//! [`Progress`](crate::Progress) implements `serde::Serialize` and
//! `serde::Deserialize` through the [`Record`] wire form. The helpers here
//! add the stricter JSON entry points that report *why* a record was
//! rejected.

pub mod record;

pub use record::{Record, from_json_str, from_json_value, to_json_value};
