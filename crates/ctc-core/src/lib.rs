//! # CTC Core Library
//!
//! This library provides the business logic for CTC ("Chud to Chad"), a daily
//! habit tracker: users complete predefined tasks, earn points, and see how the
//! day measures up against a point goal. The `ctc` CLI is a thin presentation
//! layer over the same library.
//!
//! ## Architecture
//!
//! - **Scoring Engine**: pure functions from [`DailyState`] to a [`Score`]
//!   (points, percent of goal, status tier)
//! - **History**: weekly averages and goals hit over a fixed 7-day window
//! - **Fixtures**: starter tasks, friends feed and sample history
//! - **Config**: TOML-based preferences (initial goal input, history, logging)
//!
//! All day state lives in memory and resets when the process exits.

pub mod config;
pub mod error;
pub mod feed;
pub mod fixtures;
pub mod goal;
pub mod history;
pub mod scoring;
pub mod state;
pub mod task;

pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use feed::Friend;
pub use goal::{DailyGoal, DEFAULT_DAILY_GOAL};
pub use history::{compute_weekly_stats, HistoryWeek, WeeklyStats, DAYS_COUNTED, HISTORY_DAYS};
pub use scoring::{compute_score, set_goal, Score, StatusTier};
pub use state::DailyState;
pub use task::{Task, TaskStatus};
