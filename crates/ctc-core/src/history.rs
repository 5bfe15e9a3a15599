//! Weekly history and the stats derived from it.
//!
//! History is a fixed window of the seven previous days. Stats always count
//! today as an eighth day.

use serde::{Deserialize, Serialize};

use crate::goal::DailyGoal;

pub const HISTORY_DAYS: usize = 7;

/// History days plus today
pub const DAYS_COUNTED: u32 = HISTORY_DAYS as u32 + 1;

/// Point totals for the previous seven days, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryWeek(pub [u32; HISTORY_DAYS]);

impl HistoryWeek {
    pub fn days(&self) -> &[u32] {
        &self.0
    }

    /// History followed by today's total, as shown in the progress view.
    pub fn with_today(&self, points_today: u32) -> Vec<u32> {
        let mut chips = self.0.to_vec();
        chips.push(points_today);
        chips
    }
}

/// Stats over history plus today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Floor of the mean over all counted days
    pub average: u32,
    /// Days with points >= goal
    pub goals_hit: u32,
    pub days_counted: u32,
}

pub fn compute_weekly_stats(
    history: &HistoryWeek,
    points_today: u32,
    goal: DailyGoal,
) -> WeeklyStats {
    let total: u64 = history.0.iter().map(|&p| u64::from(p)).sum::<u64>() + u64::from(points_today);
    let average = u32::try_from(total / u64::from(DAYS_COUNTED)).unwrap_or(u32::MAX);

    let goal = goal.get();
    let past_hits = history.0.iter().filter(|&&p| p >= goal).count() as u32;
    let today_hit = u32::from(points_today >= goal);

    WeeklyStats {
        average,
        goals_hit: past_hits + today_hit,
        days_counted: DAYS_COUNTED,
    }
}
