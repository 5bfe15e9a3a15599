//! Seed data for a fresh session.

use crate::feed::Friend;
use crate::history::HistoryWeek;
use crate::task::Task;

const STARTER_TASKS: [(&str, &str, u32); 5] = [
    ("1", "Morning walk (20 min)", 15),
    ("2", "No doomscrolling before noon", 20),
    ("3", "Hydration target", 10),
    ("4", "Read 10 pages", 10),
    ("5", "Workout", 25),
];

pub const SAMPLE_HISTORY: [u32; 7] = [72, 95, 110, 55, 120, 100, 84];

pub fn starter_tasks() -> Vec<Task> {
    STARTER_TASKS
        .iter()
        .filter_map(|&(id, name, points)| match Task::new(id, name, points) {
            Ok(task) => Some(task),
            Err(e) => {
                tracing::error!(error = %e, "invalid starter task skipped");
                None
            }
        })
        .collect()
}

pub fn starter_friends() -> Vec<Friend> {
    vec![
        Friend::new("1", "gymrat_zoe", 88, "Finished Workout (+25)"),
        Friend::new("2", "mindfulmax", 104, "Hit daily goal. Chad day unlocked."),
        Friend::new("3", "studykai", 63, "Completed Focus block (+15)"),
    ]
}

pub fn sample_history() -> HistoryWeek {
    HistoryWeek(SAMPLE_HISTORY)
}
