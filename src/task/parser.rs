//! Persisted record parser
//!
//! One record per line, matching the task status line exactly:
//!
//! ```text
//! Task(<name>, Duration: <duration>s, Completed: <True|False>)
//! ```
//!
//! Names containing `(`, `)`, `,` or a newline are never written (the
//! manager refuses to register them), so the grammar stays unambiguous
//! for every file the crate itself produced. Hand-edited lines that
//! don't match abort the parse rather than being skipped.

use regex::Regex;

use super::model::TaskState;
use crate::manager::error::{Result, TaskError};

/// A single parsed record, before it becomes a live [`super::Task`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub name: String,
    pub duration: u64,
    pub state: TaskState,
}

/// Parse a whole persisted file into records.
///
/// Blank lines are skipped. Any malformed line fails the parse with the
/// 1-based line number; nothing before it is returned.
pub fn parse_records(content: &str) -> Result<Vec<TaskRecord>> {
    // Record line: Task(Build, Duration: 3s, Completed: True)
    let record_re = Regex::new(r"^Task\((.*), Duration: (\d+)s, Completed: (True|False)\)$")
        .expect("record regex is valid");

    let mut records = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let caps = record_re
            .captures(line)
            .ok_or_else(|| TaskError::MalformedRecord {
                line: idx + 1,
                reason: "line does not match the task record grammar".to_string(),
            })?;

        let duration = caps[2]
            .parse::<u64>()
            .map_err(|e| TaskError::MalformedRecord {
                line: idx + 1,
                reason: format!("bad duration: {}", e),
            })?;

        // The regex only admits the exact True/False tokens
        let state = TaskState::parse(&caps[3]).ok_or_else(|| TaskError::MalformedRecord {
            line: idx + 1,
            reason: "bad completion flag".to_string(),
        })?;

        records.push(TaskRecord {
            name: caps[1].to_string(),
            duration,
            state,
        });
    }

    Ok(records)
}
