//! # toy-robot
//!
//! A toy robot simulator. A robot is placed on a bounded rectangular desk and
//! driven with `MOVE`, `LEFT`, `RIGHT` and `REPORT`; any command that would
//! take it off the desk is refused and leaves it where it was.
//!
//! The desk ([`Grid`]) and robot ([`Agent`]) know nothing about text. The
//! [`Session`] reads lines, parses them with the grammar in [`command`], and
//! writes replies, so it can run over stdin/stdout or over in-memory buffers.

pub mod agent;
pub mod command;
pub mod error;
pub mod grid;
pub mod interpreter;

pub use agent::*;
pub use command::*;
pub use error::*;
pub use grid::*;
pub use interpreter::*;
