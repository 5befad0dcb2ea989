//! Homework domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A homework assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub subject: String,
    pub task: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
}

/// Fields for a new homework assignment. The store assigns the id and
/// `completed` starts false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHomework {
    pub subject: String,
    pub task: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

/// Homework priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse from string, defaulting to medium.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}
