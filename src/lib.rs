//! Taskmill library - concurrent task execution with durable status snapshots
//!
//! Tasks are named units of simulated work. The manager runs an arbitrary
//! batch of them in parallel and can persist completion state to a flat
//! text file so status survives a restart.

pub mod manager;
pub mod task;
