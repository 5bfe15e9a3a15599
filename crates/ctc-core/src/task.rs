//! Task model.
//!
//! A task is a predefined habit worth a fixed number of points. The task set
//! is fixed for a session; only the completion flag ever changes. Every
//! `Task` in existence has a non-empty id and awards at least one point,
//! whether built with [`Task::new`] or deserialized.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Completion state of a single task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
}

/// A habit the user can mark complete for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: String,
    name: String,
    points: u32,
    completed: bool,
}

/// Unvalidated wire form of [`Task`].
#[derive(Deserialize)]
struct TaskRecord {
    id: String,
    name: String,
    points: u32,
    #[serde(default)]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::new(record.id, record.name, record.points)?;
        task.completed = record.completed;
        Ok(task)
    }
}

impl Task {
    /// Create a pending task.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is empty or `points` is zero.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        points: u32,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if points == 0 {
            return Err(ValidationError::NonPositivePoints { id });
        }
        Ok(Self {
            id,
            name: name.into(),
            points,
            completed: false,
        })
    }

    /// Identifier, stable for the session
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label; not used in scoring
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    /// Flip between pending and completed.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub(crate) fn mark_pending(&mut self) {
        self.completed = false;
    }

    /// Points this task contributes to today's total.
    pub fn earned(&self) -> u32 {
        if self.completed {
            self.points
        } else {
            0
        }
    }
}
