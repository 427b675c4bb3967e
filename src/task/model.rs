//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier, stable for the lifetime of a store instance.
///
/// Ids are not written to disk. They are handed out in file order on load
/// and counted upwards for new tasks, so a deletion never shifts another
/// task's id the way it shifts positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    /// Parse the exact spelling used in the tasks file
    pub fn from_file_value(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(Self::Pending),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Parse user input (case-insensitive, with a few aliases)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "todo" | "open" => Some(Self::Pending),
            "completed" | "complete" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The spelling written to the tasks file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pending => "○",
            Self::Completed => "●",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    /// Task description; never blank
    pub text: String,

    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            status: TaskStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// The text on one line, with line breaks shown as `⏎`
    pub fn summary(&self) -> String {
        self.text.lines().collect::<Vec<_>>().join(" ⏎ ")
    }
}

/// Summary counters shown under the task list
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    /// `completed / total`, or 0.0 for an empty list
    pub progress: f64,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        let progress = if total > 0 {
            completed as f64 / total as f64
        } else {
            0.0
        };
        Self {
            total,
            completed,
            progress,
        }
    }

    /// Progress as a whole percentage, rounded to nearest
    pub fn progress_percent(&self) -> u32 {
        (self.progress * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(n: u64, text: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId(n),
            text: text.to_string(),
            status,
        }
    }

    #[test]
    fn test_status_file_values() {
        assert_eq!(
            TaskStatus::from_file_value("Pending"),
            Some(TaskStatus::Pending)
        );
        assert_eq!(
            TaskStatus::from_file_value("Completed"),
            Some(TaskStatus::Completed)
        );
        assert_eq!(TaskStatus::from_file_value("completed"), None);
        assert_eq!(TaskStatus::from_file_value("Done"), None);
        assert_eq!(TaskStatus::from_file_value(""), None);
    }

    #[test]
    fn test_status_parse_user_input() {
        assert_eq!(TaskStatus::parse("done"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::parse(" Completed "), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::parse("TODO"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("pending"), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::parse("blocked"), None);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Pending);
    }

    #[test]
    fn test_new_task_is_pending() {
        let t = Task::new(TaskId(7), "Buy milk");
        assert_eq!(t.status, TaskStatus::Pending);
        assert_eq!(t.id.to_string(), "#7");
    }

    #[test]
    fn test_summary_flattens_line_breaks() {
        let t = task(1, "first\r\nsecond", TaskStatus::Pending);
        assert_eq!(t.summary(), "first ⏎ second");
        assert_eq!(task(2, "plain", TaskStatus::Pending).summary(), "plain");
    }

    #[test]
    fn test_stats_empty() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.progress, 0.0);
        assert_eq!(stats.progress_percent(), 0);
    }

    #[test]
    fn test_stats_one_of_three() {
        let tasks = vec![
            task(1, "a", TaskStatus::Completed),
            task(2, "b", TaskStatus::Pending),
            task(3, "c", TaskStatus::Pending),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert!((stats.progress - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.progress_percent(), 33);
    }

    #[test]
    fn test_stats_all_done() {
        let tasks = vec![task(1, "a", TaskStatus::Completed)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.progress, 1.0);
        assert_eq!(stats.progress_percent(), 100);
    }
}
