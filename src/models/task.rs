use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Work,
    #[default]
    Personal,
    Health,
    Urgent,
}

impl TaskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Personal => "personal",
            TaskCategory::Health => "health",
            TaskCategory::Urgent => "urgent",
        }
    }

    /// ANSI color used when listing tasks.
    pub fn color(&self) -> &'static str {
        match self {
            TaskCategory::Work => "\x1b[32m",
            TaskCategory::Health => "\x1b[36m",
            TaskCategory::Urgent => "\x1b[31m",
            TaskCategory::Personal => "\x1b[37m",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub category: TaskCategory,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            completed: false,
            time: None,
            priority: Priority::Medium,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Completion ratio of the task list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        let total = tasks.len();
        let percent = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        Self {
            completed,
            total,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
