//! One-shot scoring commands.

use clap::Args;
use ctc_core::fixtures::starter_tasks;
use ctc_core::{compute_weekly_stats, Config, DailyGoal, DailyState, Score, WeeklyStats};
use serde::Serialize;

#[derive(Args)]
pub struct DayArgs {
    /// Task ids to toggle complete (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    complete: Vec<String>,
    /// Daily goal input (defaults to config goal.initial_input)
    #[arg(long)]
    goal: Option<String>,
}

impl DayArgs {
    fn build_state(&self, config: &Config) -> DailyState {
        let goal = match &self.goal {
            Some(raw) => DailyGoal::parse(raw),
            None => config.initial_goal(),
        };
        let mut state = DailyState::new(starter_tasks(), goal);
        for id in &self.complete {
            if !state.toggle_task(id) {
                tracing::warn!(task_id = %id, "no such task");
            }
        }
        state
    }
}

#[derive(Serialize)]
struct ScoreReport {
    goal: DailyGoal,
    #[serde(flatten)]
    score: Score,
    label: &'static str,
}

#[derive(Serialize)]
struct StatsReport {
    goal: DailyGoal,
    points_today: u32,
    percent_of_goal: u32,
    #[serde(flatten)]
    weekly: WeeklyStats,
    history: Vec<u32>,
}

pub fn run_score(args: DayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = args.build_state(config);
    let score = state.score();
    let report = ScoreReport {
        goal: state.goal,
        score,
        label: score.status.label(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub fn run_stats(args: DayArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = args.build_state(config);
    let score = state.score();
    let history = config.history_week();
    let report = StatsReport {
        goal: state.goal,
        points_today: score.points_today,
        percent_of_goal: score.percent_of_goal,
        weekly: compute_weekly_stats(&history, score.points_today, state.goal),
        history: history.with_today(score.points_today),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
