//! Integration tests walking through a full day.

use ctc_core::fixtures::{sample_history, starter_friends, starter_tasks};
use ctc_core::{compute_weekly_stats, Config, DailyGoal, DailyState, StatusTier};

#[test]
fn test_full_day_workflow() {
    let mut state = DailyState::new(starter_tasks(), DailyGoal::parse("100"));
    assert_eq!(state.score().status, StatusTier::ChudZone);

    state.toggle_task("1");
    state.toggle_task("5");
    let score = state.score();
    assert_eq!(score.points_today, 40);
    assert_eq!(score.percent_of_goal, 40);
    assert_eq!(score.status.label(), "Rising");

    for id in ["2", "3", "4"] {
        state.toggle_task(id);
    }
    let score = state.score();
    assert_eq!(score.points_today, 80);
    assert_eq!(score.status.label(), "Almost Chad");

    // Lowering the goal pushes the day over the top
    state.set_goal("50");
    let score = state.score();
    assert_eq!(score.percent_of_goal, 160);
    assert_eq!(score.clamped_percent, 100);
    assert_eq!(score.status.label(), "Chad day");

    state.reset_day();
    assert_eq!(state.score().points_today, 0);
    assert_eq!(state.goal.get(), 50);
}

#[test]
fn test_weekly_stats_with_sample_history() {
    let stats = compute_weekly_stats(&sample_history(), 84, DailyGoal::default());
    assert_eq!(stats.average, 90);
    assert_eq!(stats.goals_hit, 3);
}

#[test]
fn test_weekly_stats_follow_live_score() {
    let state = DailyState::new(starter_tasks(), DailyGoal::parse("40"))
        .toggled("1")
        .toggled("5");
    let stats = compute_weekly_stats(&sample_history(), state.score().points_today, state.goal);
    // every history day beats 40, today hits exactly 40
    assert_eq!(stats.goals_hit, 8);
    assert_eq!(stats.average, (72 + 95 + 110 + 55 + 120 + 100 + 84 + 40) / 8);
}

#[test]
fn test_goal_fallbacks() {
    assert_eq!(DailyGoal::parse("0").get(), 100);
    assert_eq!(DailyGoal::parse("abc").get(), 100);
    assert_eq!(DailyGoal::parse("50").get(), 50);
}

#[test]
fn test_config_drives_session_start() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("goal.initial_input", "80").unwrap();
    cfg.set("history.week", "[80,80,80,80,80,80,80]").unwrap();
    cfg.save_to(&path).unwrap();

    let cfg = Config::load_from(&path).unwrap();
    let state = DailyState::new(starter_tasks(), cfg.initial_goal());
    let stats = compute_weekly_stats(&cfg.history_week(), 0, state.goal);
    assert_eq!(state.goal.get(), 80);
    assert_eq!(stats.goals_hit, 7);
    assert_eq!(stats.average, 70);
}

#[test]
fn test_friends_feed_fixture() {
    let friends = starter_friends();
    assert_eq!(friends.len(), 3);
    assert!(friends.iter().any(|f| f.chad_percent > 100));
    assert_eq!(friends[1].display_handle(), "@mindfulmax");
}

#[test]
fn test_huge_goal_keeps_day_in_chud_zone() {
    let mut state = DailyState::new(starter_tasks(), DailyGoal::parse("100"));
    for id in ["1", "2", "3", "4", "5"] {
        state.toggle_task(id);
    }
    state.set_goal("5000000000");
    let score = state.score();
    assert_eq!(state.goal.get(), u32::MAX);
    assert_eq!(score.points_today, 80);
    assert_eq!(score.percent_of_goal, 0);
    assert_eq!(score.status, StatusTier::ChudZone);
}

#[test]
fn test_day_state_rejects_invalid_tasks_on_load() {
    let json = r#"{"tasks":[{"id":"","name":"x","points":0,"completed":false}],"goal":100}"#;
    assert!(serde_json::from_str::<DailyState>(json).is_err());

    let json = r#"{"tasks":[{"id":"1","name":"Walk","points":15,"completed":true}],"goal":100}"#;
    let state: DailyState = serde_json::from_str(json).unwrap();
    assert_eq!(state.score().points_today, 15);
}
