//! Taskmill - concurrent task runner with durable status snapshots
//!
//! Demo orchestration: register a batch of tasks, run them in parallel,
//! persist their status, and print the reloaded status lines.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use taskmill::manager::TaskManager;
use taskmill::task::Task;

const TASK_DATA_FILE: &str = "task_data.txt";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskmill=info")),
        )
        .init();

    let mut manager = TaskManager::new();

    manager.add_task(Task::new("Task 1", 3))?;
    manager.add_task(Task::new("Task 2", 2))?;
    manager.add_task(Task::new("Task 3", 4))?;

    tracing::info!("Starting all tasks...");
    manager.start_all_tasks().await;

    // Component-level failures are logged and the run continues; anything
    // unexpected bubbles up through anyhow and ends the process.
    if let Err(e) = manager.save_task_data(TASK_DATA_FILE) {
        tracing::error!("Task Manager Error: {}", e);
    }
    if let Err(e) = manager.load_task_data(TASK_DATA_FILE) {
        tracing::error!("Task Manager Error: {}", e);
    }

    for status in manager.get_task_status() {
        println!("{}", status);
    }

    Ok(())
}
