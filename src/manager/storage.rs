//! Task status persistence - flat text records, one per line

use std::fs;
use std::path::Path;

use super::error::{Result, TaskError};
use super::TaskManager;
use crate::task::{parser, Task};

impl TaskManager {
    /// Write one status record per task, in collection order, truncating
    /// any existing file at `path`.
    pub fn save_task_data(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let mut content = String::new();
        for task in self.tasks() {
            content.push_str(&task.to_string());
            content.push('\n');
        }
        fs::write(path, content)?;

        tracing::info!("Task data saved to {}.", path.display());
        Ok(())
    }

    /// Reconstruct tasks from a file written by
    /// [`save_task_data`](Self::save_task_data) and append them to the
    /// collection.
    ///
    /// Existing tasks are kept, so loading the same file twice doubles
    /// the collection. A malformed line aborts the whole load and leaves
    /// the collection unchanged.
    pub fn load_task_data(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TaskError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        // Parse the whole file before registering anything, so a bad
        // record partway through cannot leave a half-loaded collection.
        let records = parser::parse_records(&content)?;

        for record in records {
            let task = Task::new(record.name, record.duration);
            task.set_state(record.state);
            self.add_task(task)?;
        }

        tracing::info!("Task data loaded from {}.", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_appends() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("task_data.txt");

        let mut manager = TaskManager::new();
        manager.add_task(Task::new("Task 1", 1))?;
        manager.add_task(Task::new("Task 2", 2))?;

        manager.save_task_data(&path)?;
        manager.load_task_data(&path)?;

        // Load appends; it never replaces
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.tasks()[2].name(), "Task 1");
        assert_eq!(manager.tasks()[3].name(), "Task 2");
        Ok(())
    }

    #[test]
    fn test_load_missing_file() -> Result<()> {
        let temp = tempdir()?;

        let mut manager = TaskManager::new();
        manager.add_task(Task::new("keep", 1))?;

        let err = manager
            .load_task_data(temp.path().join("absent.txt"))
            .unwrap_err();
        assert!(matches!(err, TaskError::FileNotFound(_)));
        assert_eq!(manager.len(), 1);
        Ok(())
    }

    #[test]
    fn test_load_malformed_file_aborts() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("task_data.txt");
        fs::write(
            &path,
            "Task(ok, Duration: 1s, Completed: True)\ngarbage line\n",
        )?;

        let mut manager = TaskManager::new();
        let err = manager.load_task_data(&path).unwrap_err();

        assert!(matches!(err, TaskError::MalformedRecord { line: 2, .. }));
        // Nothing from the damaged file was registered
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_preserves_completion_flag() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("task_data.txt");
        fs::write(
            &path,
            "Task(done, Duration: 3s, Completed: True)\n\
             Task(todo, Duration: 2s, Completed: False)\n",
        )?;

        let mut manager = TaskManager::new();
        manager.load_task_data(&path)?;

        assert!(manager.tasks()[0].is_completed());
        assert!(!manager.tasks()[1].is_completed());
        Ok(())
    }

    #[test]
    fn test_save_empty_collection() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("task_data.txt");

        let manager = TaskManager::new();
        manager.save_task_data(&path)?;

        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn test_save_to_unwritable_path() {
        let manager = TaskManager::new();
        let err = manager
            .save_task_data("/nonexistent-dir/task_data.txt")
            .unwrap_err();
        assert!(matches!(err, TaskError::Io(_)));
    }
}
