//! Daily scoring engine.
//!
//! Turns task completion into points, a percentage of the daily goal and a
//! status tier:
//!
//! | percent_of_goal | Tier        |
//! |-----------------|-------------|
//! | >= 100          | Chad day    |
//! | >= 80           | Almost Chad |
//! | >= 40           | Rising      |
//! | otherwise       | Chud zone   |
//!
//! `percent_of_goal` is not clamped; over-achievement is reported as-is.
//! Only `clamped_percent`, meant for progress bars, is capped at 100.

use serde::{Deserialize, Serialize};

use crate::goal::DailyGoal;
use crate::state::DailyState;

/// Qualitative band over the percent of goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    ChudZone,
    Rising,
    AlmostChad,
    ChadDay,
}

impl StatusTier {
    /// Highest tier whose threshold `percent` reaches.
    pub fn from_percent(percent: u32) -> Self {
        match percent {
            p if p >= 100 => StatusTier::ChadDay,
            p if p >= 80 => StatusTier::AlmostChad,
            p if p >= 40 => StatusTier::Rising,
            _ => StatusTier::ChudZone,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::ChadDay => "Chad day",
            StatusTier::AlmostChad => "Almost Chad",
            StatusTier::Rising => "Rising",
            StatusTier::ChudZone => "Chud zone",
        }
    }
}

/// Derived values for the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points_today: u32,
    /// May exceed 100
    pub percent_of_goal: u32,
    /// `min(100, percent_of_goal)`, for progress fill only
    pub clamped_percent: u32,
    pub status: StatusTier,
}

/// Compute the score for `state`. Pure and deterministic.
pub fn compute_score(state: &DailyState) -> Score {
    let points: u64 = state.tasks.iter().map(|task| u64::from(task.earned())).sum();
    let points_today = u32::try_from(points).unwrap_or(u32::MAX);
    let percent_of_goal = percent_of(points_today, state.goal);

    Score {
        points_today,
        percent_of_goal,
        clamped_percent: percent_of_goal.min(100),
        status: StatusTier::from_percent(percent_of_goal),
    }
}

/// `floor(points * 100 / goal)`. The goal is never zero.
pub fn percent_of(points: u32, goal: DailyGoal) -> u32 {
    let percent = u64::from(points) * 100 / u64::from(goal.get());
    u32::try_from(percent).unwrap_or(u32::MAX)
}

/// Resolve raw goal input. See [`DailyGoal::parse`].
pub fn set_goal(raw: &str) -> DailyGoal {
    DailyGoal::parse(raw)
}
