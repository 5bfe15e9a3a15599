//! In-memory state for a single day.

use serde::{Deserialize, Serialize};

use crate::goal::DailyGoal;
use crate::scoring::{compute_score, Score};
use crate::task::Task;

/// Tasks and goal for the running session.
///
/// Derived values (points, percent, status) are never stored; see
/// [`DailyState::score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyState {
    /// Display order only; scoring ignores it
    pub tasks: Vec<Task>,
    pub goal: DailyGoal,
}

impl DailyState {
    /// Start a day. Every task begins pending.
    pub fn new(tasks: Vec<Task>, goal: DailyGoal) -> Self {
        let tasks = tasks
            .into_iter()
            .map(|mut task| {
                task.mark_pending();
                task
            })
            .collect();
        Self { tasks, goal }
    }

    /// Flip completion of the task with `id`.
    ///
    /// Returns `false` and leaves the state untouched when no task matches.
    pub fn toggle_task(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                tracing::debug!(task_id = id, completed = task.is_completed(), "task toggled");
                true
            }
            None => {
                tracing::debug!(task_id = id, "toggle ignored, unknown task");
                false
            }
        }
    }

    /// Mark every task pending. Goal and task set are unchanged.
    pub fn reset_day(&mut self) {
        for task in &mut self.tasks {
            task.mark_pending();
        }
        tracing::debug!(tasks = self.tasks.len(), "day reset");
    }

    /// Replace the goal from raw user input, falling back to the default.
    pub fn set_goal(&mut self, raw: &str) -> DailyGoal {
        self.goal = DailyGoal::parse(raw);
        self.goal
    }

    pub fn toggled(mut self, id: &str) -> Self {
        self.toggle_task(id);
        self
    }

    pub fn reset(mut self) -> Self {
        self.reset_day();
        self
    }

    pub fn score(&self) -> Score {
        compute_score(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::starter_tasks;

    fn day() -> DailyState {
        DailyState::new(starter_tasks(), DailyGoal::default())
    }

    #[test]
    fn new_clears_completion() {
        let mut tasks = starter_tasks();
        tasks[0].toggle();
        let state = DailyState::new(tasks, DailyGoal::default());
        assert!(state.tasks.iter().all(|t| !t.is_completed()));
    }

    #[test]
    fn toggle_only_touches_matching_task() {
        let mut state = day();
        assert!(state.toggle_task("2"));
        for task in &state.tasks {
            assert_eq!(task.is_completed(), task.id() == "2");
        }
    }

    #[test]
    fn unknown_id_is_noop() {
        let before = day();
        let mut after = before.clone();
        assert!(!after.toggle_task("nope"));
        assert_eq!(before, after);
    }

    #[test]
    fn reset_keeps_goal_and_tasks() {
        let mut state = day().toggled("1").toggled("5");
        state.set_goal("60");
        let reset = state.clone().reset();
        assert_eq!(reset.goal.get(), 60);
        assert_eq!(reset.tasks.len(), state.tasks.len());
        assert!(reset.tasks.iter().all(|t| !t.is_completed()));
    }

    #[test]
    fn set_goal_falls_back() {
        let mut state = day();
        assert_eq!(state.set_goal("abc").get(), 100);
        assert_eq!(state.set_goal("30").get(), 30);
    }
}
