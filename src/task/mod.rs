//! Task model and persisted record grammar
//!
//! A task is a named, fixed-duration unit of simulated work with a
//! completion flag. Its `Display` rendering doubles as the persisted
//! record format, which [`parser`] turns back into fields.

pub mod model;
pub mod parser;

pub use model::{Task, TaskState};
pub use parser::TaskRecord;
