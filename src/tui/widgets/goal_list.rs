/// GoalList widget - scoring events of a game card
///
/// The latest-goal panel shows the last visible goal; the full list shows
/// every visible goal.
/// Each in-play goal takes two lines: team, time, scorer and tags, then the
/// assists. Shootout goals take a single line.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use crate::config::DisplayConfig;
use crate::formatting::{format_assists, format_goal_tags, format_goal_time, format_scorer};
use crate::layout_constants::{GOAL_TEAM_WIDTH, GOAL_TIME_WIDTH};
use crate::tui::widgets::RenderableWidget;
use crate::types::Goal;

#[derive(Debug, Clone)]
pub struct GoalList<'a> {
    /// Visible goals in chronological order
    pub goals: Vec<&'a Goal>,
    /// Show every goal instead of the latest one
    pub full: bool,
}

impl<'a> GoalList<'a> {
    pub fn new(goals: Vec<&'a Goal>, full: bool) -> Self {
        Self { goals, full }
    }

    fn title(&self) -> &'static str {
        if self.full {
            "Goals"
        } else {
            "Latest goal"
        }
    }

    fn shown(&self) -> &[&'a Goal] {
        if self.full {
            &self.goals
        } else {
            let start = self.goals.len().saturating_sub(1);
            &self.goals[start..]
        }
    }

    fn lines(&self) -> Vec<String> {
        let shown = self.shown();
        if shown.is_empty() {
            return vec![" No goals yet".to_string()];
        }
        shown.iter().flat_map(|goal| goal_lines(goal)).collect()
    }
}

/// Text lines of a single goal entry
fn goal_lines(goal: &Goal) -> Vec<String> {
    let mut headline = format!(
        " {:<team$}{:<time$}{}",
        goal.team(),
        format_goal_time(goal),
        format_scorer(goal.scorer()),
        team = GOAL_TEAM_WIDTH,
        time = GOAL_TIME_WIDTH,
    );
    if let Some(tags) = format_goal_tags(goal) {
        headline.push_str("  ");
        headline.push_str(&tags);
    }

    let mut lines = vec![headline];
    if let Some(assists) = format_assists(goal) {
        lines.push(format!("{}{}", " ".repeat(1 + GOAL_TEAM_WIDTH + GOAL_TIME_WIDTH), assists));
    }
    lines
}

impl RenderableWidget for GoalList<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }

        let width = area.width as usize;
        buf.set_stringn(
            area.x,
            area.y,
            format!(" {}", self.title()),
            width,
            Style::default().add_modifier(Modifier::BOLD),
        );

        for (y, line) in (area.y + 1..area.bottom()).zip(self.lines()) {
            buf.set_stringn(area.x, y, &line, width, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1 + self.lines().len() as u16)
    }
}
