//! Presentation state and text rendering for the interactive session.
//!
//! `ViewState` holds what the screen needs beyond the day itself: the active
//! tab and the raw goal input buffer. All scoring goes through ctc-core.

use std::fmt;
use std::str::FromStr;

use ctc_core::fixtures::{starter_friends, starter_tasks};
use ctc_core::{
    compute_weekly_stats, Config, DailyState, Friend, HistoryWeek, TaskStatus, DAYS_COUNTED,
};

const BAR_WIDTH: u32 = 20;

pub const HELP: &str = "\
commands:
  today | social | progress   switch panel
  toggle <id>                 mark a task done / undone
  reset                       mark every task pending
  goal <points>               set the daily goal
  show                        redraw the current panel
  help                        this text
  quit                        leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Today,
    Social,
    Progress,
}

impl Tab {
    fn label(self) -> &'static str {
        match self {
            Tab::Today => "Today",
            Tab::Social => "Social",
            Tab::Progress => "Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Switch(Tab),
    Toggle(String),
    Reset,
    Goal(String),
    Show,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "today" => Ok(SessionCommand::Switch(Tab::Today)),
            "social" => Ok(SessionCommand::Switch(Tab::Social)),
            "progress" => Ok(SessionCommand::Switch(Tab::Progress)),
            "toggle" if !rest.is_empty() => Ok(SessionCommand::Toggle(rest.to_string())),
            "toggle" => Err("usage: toggle <id>".to_string()),
            "reset" => Ok(SessionCommand::Reset),
            "goal" => Ok(SessionCommand::Goal(rest.to_string())),
            "show" => Ok(SessionCommand::Show),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(format!("unknown command: {other} (try 'help')")),
        }
    }
}

/// What the session loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Help,
    Quit,
}

pub struct ViewState {
    pub tab: Tab,
    /// Raw goal text as typed
    pub goal_input: String,
    pub day: DailyState,
    history: HistoryWeek,
    friends: Vec<Friend>,
}

impl ViewState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tab: Tab::Today,
            goal_input: config.goal.initial_input.clone(),
            day: DailyState::new(starter_tasks(), config.initial_goal()),
            history: config.history_week(),
            friends: starter_friends(),
        }
    }

    pub fn apply(&mut self, command: SessionCommand) -> Outcome {
        match command {
            SessionCommand::Switch(tab) => self.tab = tab,
            SessionCommand::Toggle(id) => {
                self.day.toggle_task(&id);
            }
            SessionCommand::Reset => self.day.reset_day(),
            SessionCommand::Goal(raw) => {
                self.day.set_goal(&raw);
                self.goal_input = raw;
            }
            SessionCommand::Show => {}
            SessionCommand::Help => return Outcome::Help,
            SessionCommand::Quit => return Outcome::Quit,
        }
        Outcome::Render
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_today(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.day.score();

        writeln!(f, "Daily Goal")?;
        writeln!(f, "  input: {}", self.goal_input)?;
        writeln!(f, "  Goal: {} points", self.day.goal)?;
        writeln!(f)?;
        writeln!(f, "Today Score")?;
        writeln!(f, "  {} pts", score.points_today)?;
        writeln!(f, "  {}% Chad | {}", score.percent_of_goal, score.status.label())?;
        writeln!(f, "  {}", progress_bar(score.clamped_percent))?;
        writeln!(f)?;
        writeln!(f, "Tasks")?;
        for task in &self.day.tasks {
            let mark = match task.status() {
                TaskStatus::Completed => "x",
                TaskStatus::Pending => " ",
            };
            writeln!(
                f,
                "  [{mark}] {:>2}  {:<30} +{}",
                task.id(),
                task.name(),
                task.points()
            )?;
        }
        Ok(())
    }

    fn fmt_social(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Friends Feed")?;
        for friend in &self.friends {
            writeln!(
                f,
                "  {:<16} {:>4}%  {}",
                friend.display_handle(),
                friend.chad_percent,
                friend.last_action
            )?;
        }
        Ok(())
    }

    fn fmt_progress(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let score = self.day.score();
        let stats = compute_weekly_stats(&self.history, score.points_today, self.day.goal);

        writeln!(f, "Stats")?;
        writeln!(f, "  Average points/day       {}", stats.average)?;
        writeln!(
            f,
            "  Goals hit (last {DAYS_COUNTED} days) {}/{}",
            stats.goals_hit, stats.days_counted
        )?;
        writeln!(f, "  Today points             {}", score.points_today)?;
        writeln!(f, "  Current Chad %           {}%", score.percent_of_goal)?;
        writeln!(f)?;
        writeln!(f, "Weekly History (pts)")?;
        let chips: Vec<String> = self
            .history
            .with_today(score.points_today)
            .iter()
            .enumerate()
            .map(|(i, points)| {
                if i == self.history.days().len() {
                    format!("*{points}*")
                } else {
                    points.to_string()
                }
            })
            .collect();
        writeln!(f, "  {}", chips.join("  "))
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CTC - Chud to Chad")?;
        let tabs: Vec<String> = [Tab::Today, Tab::Social, Tab::Progress]
            .into_iter()
            .map(|tab| {
                if tab == self.tab {
                    format!("[{}]", tab.label())
                } else {
                    format!(" {} ", tab.label())
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" "))?;
        writeln!(f)?;

        match self.tab {
            Tab::Today => self.fmt_today(f),
            Tab::Social => self.fmt_social(f),
            Tab::Progress => self.fmt_progress(f),
        }
    }
}

fn progress_bar(clamped_percent: u32) -> String {
    let filled = (clamped_percent * BAR_WIDTH / 100) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!("[{}{}] {clamped_percent}%", "#".repeat(filled), ".".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::from_config(&Config::default())
    }

    #[test]
    fn parses_commands() {
        assert_eq!("toggle 3".parse::<SessionCommand>(), Ok(SessionCommand::Toggle("3".into())));
        assert_eq!("  Social ".parse::<SessionCommand>(), Ok(SessionCommand::Switch(Tab::Social)));
        assert_eq!("goal".parse::<SessionCommand>(), Ok(SessionCommand::Goal(String::new())));
        assert_eq!("goal  75 ".parse::<SessionCommand>(), Ok(SessionCommand::Goal("75".into())));
        assert!("toggle".parse::<SessionCommand>().is_err());
        assert!("fly".parse::<SessionCommand>().is_err());
    }

    #[test]
    fn goal_input_kept_raw_but_resolved() {
        let mut view = view();
        view.apply(SessionCommand::Goal("abc".into()));
        assert_eq!(view.goal_input, "abc");
        assert_eq!(view.day.goal.get(), 100);
        assert!(view.render().contains("Goal: 100 points"));
    }

    #[test]
    fn unknown_toggle_leaves_day_alone() {
        let mut view = view();
        let before = view.day.clone();
        assert_eq!(view.apply(SessionCommand::Toggle("42".into())), Outcome::Render);
        assert_eq!(view.day, before);
    }

    #[test]
    fn today_panel_marks_completed() {
        let mut view = view();
        view.apply(SessionCommand::Toggle("5".into()));
        let text = view.render();
        assert!(text.contains("[Today]"));
        assert!(text.contains("[x]  5"));
        assert!(text.contains("25 pts"));
        assert!(text.contains("25% Chad | Chud zone"));
    }

    #[test]
    fn progress_panel_shows_weekly_stats() {
        let mut view = view();
        view.apply(SessionCommand::Switch(Tab::Progress));
        let text = view.render();
        // (72+95+110+55+120+100+84+0) / 8 = 79
        assert!(text.contains("Average points/day       79"));
        assert!(text.contains("3/8"));
        assert!(text.contains("*0*"));
    }

    #[test]
    fn social_panel_lists_friends() {
        let mut view = view();
        view.apply(SessionCommand::Switch(Tab::Social));
        let text = view.render();
        assert!(text.contains("@mindfulmax"));
        assert!(text.contains("104%"));
    }

    #[test]
    fn progress_bar_clamps_fill() {
        assert_eq!(progress_bar(0), format!("[{}] 0%", ".".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(20)));
        assert_eq!(progress_bar(40), format!("[{}{}] 40%", "#".repeat(8), ".".repeat(12)));
    }

    #[test]
    fn quit_and_help_do_not_render() {
        let mut view = view();
        assert_eq!(view.apply(SessionCommand::Help), Outcome::Help);
        assert_eq!(view.apply(SessionCommand::Quit), Outcome::Quit);
    }
}
