//! Task data model

use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// Execution state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Not yet run
    Pending,
    /// Simulated work finished
    Completed,
}

impl TaskState {
    /// Parse the completion flag used in persisted records
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "False" => Some(Self::Pending),
            "True" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Get the completion flag text for persisted records
    pub fn record_label(&self) -> &'static str {
        match self {
            Self::Pending => "False",
            Self::Completed => "True",
        }
    }
}

/// A named, fixed-duration unit of simulated work
#[derive(Debug)]
pub struct Task {
    name: String,
    duration: u64,
    state: Mutex<TaskState>,
}

impl Task {
    /// Create a pending task. `duration` is the simulated work length in
    /// whole seconds.
    pub fn new(name: impl Into<String>, duration: u64) -> Self {
        Self {
            name: name.into(),
            duration,
            state: Mutex::new(TaskState::Pending),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simulated work length in seconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn state(&self) -> TaskState {
        *self.state.lock().unwrap()
    }

    pub fn is_completed(&self) -> bool {
        self.state() == TaskState::Completed
    }

    /// Overwrite the state directly; used when reconstructing persisted
    /// tasks, where completion was observed in a previous process.
    pub(crate) fn set_state(&self, state: TaskState) {
        *self.state.lock().unwrap() = state;
    }

    /// Simulate the work: wait out the duration, then mark completion.
    ///
    /// Running twice waits twice but the final state is `Completed` either
    /// way.
    pub async fn run(&self) {
        tracing::info!("Starting task: {}", self.name);
        tokio::time::sleep(Duration::from_secs(self.duration)).await;
        self.set_state(TaskState::Completed);
        tracing::info!("Task {} completed.", self.name);
    }
}

impl fmt::Display for Task {
    /// Status line, also the persisted record format:
    /// `Task(<name>, Duration: <duration>s, Completed: <True|False>)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({}, Duration: {}s, Completed: {})",
            self.name,
            self.duration,
            self.state().record_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Test Task", 2);
        assert_eq!(task.name(), "Test Task");
        assert_eq!(task.duration(), 2);
        assert_eq!(task.state(), TaskState::Pending);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_task_display() {
        let task = Task::new("Build", 3);
        assert_eq!(task.to_string(), "Task(Build, Duration: 3s, Completed: False)");

        task.set_state(TaskState::Completed);
        assert_eq!(task.to_string(), "Task(Build, Duration: 3s, Completed: True)");
    }

    #[test]
    fn test_zero_duration_allowed() {
        let task = Task::new("noop", 0);
        assert_eq!(task.duration(), 0);
    }

    #[test]
    fn test_state_flag_roundtrip() {
        assert_eq!(TaskState::parse("True"), Some(TaskState::Completed));
        assert_eq!(TaskState::parse("False"), Some(TaskState::Pending));
        // The flag is case-sensitive
        assert_eq!(TaskState::parse("true"), None);
        assert_eq!(TaskState::parse("FALSE"), None);

        assert_eq!(TaskState::Completed.record_label(), "True");
        assert_eq!(TaskState::Pending.record_label(), "False");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_marks_completed() {
        let task = Task::new("sleepy", 5);
        assert!(!task.is_completed());

        task.run().await;
        assert!(task.is_completed());

        // Re-running waits again but the state stays terminal
        task.run().await;
        assert!(task.is_completed());
    }
}
