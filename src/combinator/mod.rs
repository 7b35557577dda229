//! Combinators over progress values.
//!
//! All combinators are pure functions of the variant tag:
//!
//! - [`chain`]: `then`, `then_with`, `catch`, `finally`, `map`, `if_none`, `if_pending`
//! - [`when`](mod@when): partial pattern fold over the four states
//! - [`all`](mod@all): aggregate many values, worst status wins
//! - [`race`](mod@race): surface the first settled value

pub mod all;
pub mod chain;
pub mod race;
pub mod when;

pub use all::{all, all2, all3};
pub use race::race;
pub use when::When;
