//! Task manager module
//!
//! Owns an ordered collection of tasks and provides:
//! - registration with name validation
//! - concurrent execution with a join barrier (storage and status see
//!   the same insertion order)
//! - save/load of status records to a flat text file

pub mod error;
pub mod storage;

pub use error::{Result, TaskError};

use std::sync::Arc;

use tokio::task::JoinSet;

use crate::task::Task;

/// Characters the record grammar reserves. A name containing any of
/// these could not round-trip through the persisted format.
const RESERVED_NAME_CHARS: &[char] = &['(', ')', ',', '\n'];

/// Owner of an ordered task collection. Registration and runs are
/// sequenced by the caller: register, then run, then report.
#[derive(Default)]
pub struct TaskManager {
    tasks: Vec<Arc<Task>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task to the collection.
    ///
    /// Rejects names containing record-format delimiters, since such a
    /// task could never survive `save_task_data`/`load_task_data`.
    /// Duplicate names are allowed.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if task.name().contains(RESERVED_NAME_CHARS) {
            return Err(TaskError::InvalidName(task.name().to_string()));
        }
        tracing::info!("Task '{}' added to the task manager.", task.name());
        self.tasks.push(Arc::new(task));
        Ok(())
    }

    /// Run every registered task on its own worker and wait for all of
    /// them.
    ///
    /// The waits overlap, so the call takes roughly as long as the
    /// longest task, not the sum. Returns once every task in the batch
    /// has completed.
    pub async fn start_all_tasks(&self) {
        let mut workers = JoinSet::new();
        for task in &self.tasks {
            let task = Arc::clone(task);
            workers.spawn(async move { task.run().await });
        }

        // Join barrier. A panicked worker must not stop the rest of the
        // batch from being collected.
        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Task worker failed: {}", e);
            }
        }
    }

    /// Status line for every task, in registration order. Safe to call
    /// mid-run; tasks still waiting show `Completed: False`.
    pub fn get_task_status(&self) -> Vec<String> {
        self.tasks.iter().map(|task| task.to_string()).collect()
    }

    /// Tasks in registration order
    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
