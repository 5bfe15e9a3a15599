//! Daily point goal.
//!
//! The goal comes from free-form user text. Anything that is not an integer
//! of at least one falls back to [`DEFAULT_DAILY_GOAL`]; there is no error path.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DAILY_GOAL: u32 = 100;

/// Point threshold for a complete day. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DailyGoal(u32);

impl DailyGoal {
    /// Returns `None` for zero.
    pub fn new(points: u32) -> Option<Self> {
        (points >= 1).then_some(Self(points))
    }

    /// Resolve raw user input into a goal.
    ///
    /// Surrounding whitespace is ignored. Non-numeric input and values below
    /// one resolve to the default; positive values beyond `u32` saturate.
    pub fn parse(raw: &str) -> Self {
        let parsed = match raw.trim().parse::<i64>() {
            Ok(n) if n >= 1 => Some(u32::try_from(n).unwrap_or(u32::MAX)),
            Ok(_) => None,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
            Err(_) => None,
        };

        match parsed {
            Some(points) => Self(points),
            None => {
                tracing::debug!(input = raw, "goal input rejected, using default");
                Self::default()
            }
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for DailyGoal {
    fn default() -> Self {
        Self(DEFAULT_DAILY_GOAL)
    }
}

impl fmt::Display for DailyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DailyGoal> for u32 {
    fn from(goal: DailyGoal) -> Self {
        goal.0
    }
}

impl TryFrom<u32> for DailyGoal {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| "daily goal must be at least 1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(DailyGoal::parse("50").get(), 50);
        assert_eq!(DailyGoal::parse("1").get(), 1);
    }

    #[test]
    fn falls_back_on_zero_and_garbage() {
        assert_eq!(DailyGoal::parse("0").get(), 100);
        assert_eq!(DailyGoal::parse("abc").get(), 100);
        assert_eq!(DailyGoal::parse("").get(), 100);
        assert_eq!(DailyGoal::parse("-5").get(), 100);
        assert_eq!(DailyGoal::parse("12.5").get(), 100);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(DailyGoal::parse("  75 \n").get(), 75);
    }

    #[test]
    fn large_values_saturate() {
        assert_eq!(DailyGoal::parse("5000000000").get(), u32::MAX);
        assert_eq!(DailyGoal::parse("4294967295").get(), u32::MAX);
        assert_eq!(DailyGoal::parse("99999999999999999999999").get(), u32::MAX);
    }

    #[test]
    fn large_negative_values_fall_back() {
        assert_eq!(DailyGoal::parse("-99999999999999999999999").get(), 100);
        assert_eq!(DailyGoal::parse("-5000000000").get(), 100);
    }

    #[test]
    fn new_rejects_zero() {
        assert!(DailyGoal::new(0).is_none());
        assert_eq!(DailyGoal::new(3).map(DailyGoal::get), Some(3));
    }

    #[test]
    fn deserialize_rejects_zero() {
        assert!(serde_json::from_str::<DailyGoal>("0").is_err());
        assert_eq!(serde_json::from_str::<DailyGoal>("80").unwrap().get(), 80);
    }
}
