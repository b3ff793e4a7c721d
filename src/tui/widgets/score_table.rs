/// ScoreTable widget - displays period-by-period score breakdown
///
/// Renders goals per period for both teams, with overtime and shootout
/// columns once the game has reached them. Periods the game has not
/// reached yet show a dash.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use crate::config::DisplayConfig;
use crate::formatting::PLACEHOLDER;
use crate::layout_constants::{PERIOD_COL_WIDTH, SCORE_TABLE_HEIGHT, TEAM_ABBREV_COL_WIDTH};
use crate::tui::widgets::RenderableWidget;
use crate::types::{tally_period_goals, tally_score, Goal, Period, PeriodGoals, REGULATION_PERIODS};

/// Widget for displaying period-by-period scores
#[derive(Debug, Clone)]
pub struct ScoreTable {
    pub away_team: String,
    pub home_team: String,
    /// Totals; None before the game starts
    pub away_score: Option<u32>,
    pub home_score: Option<u32>,
    pub away_periods: PeriodGoals,
    pub home_periods: PeriodGoals,
    /// Latest period reached; None before the game starts
    pub current_period: Option<Period>,
    pub selected: bool,
    /// Terminal has focus; an unfocused selection is dimmed
    pub focused: bool,
}

impl ScoreTable {
    /// Table for the given goals, with play having reached `current_period`
    pub fn from_goals(
        away_team: &str,
        home_team: &str,
        goals: &[&Goal],
        current_period: Option<Period>,
        selected: bool,
    ) -> Self {
        let started = current_period.is_some();
        Self {
            away_team: away_team.to_string(),
            home_team: home_team.to_string(),
            away_score: started.then(|| tally_score(goals.iter().copied(), away_team)),
            home_score: started.then(|| tally_score(goals.iter().copied(), home_team)),
            away_periods: tally_period_goals(goals.iter().copied(), away_team),
            home_periods: tally_period_goals(goals.iter().copied(), home_team),
            current_period,
            selected,
            focused: true,
        }
    }

    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn has_ot(&self) -> bool {
        self.current_period.is_some_and(|p| p >= Period::Overtime(1))
    }

    fn has_so(&self) -> bool {
        self.current_period == Some(Period::Shootout)
    }

    /// Column headers after the team column
    fn headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["1", "2", "3"];
        if self.has_ot() {
            headers.push("OT");
        }
        if self.has_so() {
            headers.push("SO");
        }
        headers.push("T");
        headers
    }

    fn width(&self) -> usize {
        1 + TEAM_ABBREV_COL_WIDTH + self.headers().len() * (1 + PERIOD_COL_WIDTH) + 1
    }

    fn reached(&self, period: Period) -> bool {
        self.current_period.is_some_and(|current| period <= current)
    }

    /// Cell values for one team, in header order
    fn team_cells(&self, periods: &PeriodGoals, total: Option<u32>) -> Vec<String> {
        let cell = |period: Period, value: u32| {
            if self.reached(period) {
                value.to_string()
            } else {
                PLACEHOLDER.to_string()
            }
        };

        let mut cells: Vec<String> = (1..=REGULATION_PERIODS)
            .map(|n| cell(Period::Regular(n), periods.regulation[usize::from(n - 1)]))
            .collect();
        if self.has_ot() {
            cells.push(cell(Period::Overtime(1), periods.overtime));
        }
        if self.has_so() {
            cells.push(cell(Period::Shootout, periods.shootout));
        }
        cells.push(total.map_or_else(|| PLACEHOLDER.to_string(), |t| t.to_string()));
        cells
    }

    fn border(&self, left: &str, junction: &str, right: &str, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        let mut line = String::new();
        line.push_str(left);
        line.push_str(&horizontal.repeat(TEAM_ABBREV_COL_WIDTH));
        for _ in self.headers() {
            line.push_str(junction);
            line.push_str(&horizontal.repeat(PERIOD_COL_WIDTH));
        }
        line.push_str(right);
        line
    }

    fn row(&self, label: &str, cells: &[String], config: &DisplayConfig) -> String {
        let vertical = &config.box_chars.vertical;
        let mut line = String::new();
        line.push_str(vertical);
        line.push_str(&format!("{:^width$}", label, width = TEAM_ABBREV_COL_WIDTH));
        for cell in cells {
            line.push_str(vertical);
            line.push_str(&format!("{:^width$}", cell, width = PERIOD_COL_WIDTH));
        }
        line.push_str(vertical);
        line
    }

    fn get_style(&self, config: &DisplayConfig) -> Style {
        if self.selected {
            Style::default().fg(config.selection_color(self.focused))
        } else {
            Style::default()
        }
    }
}

impl RenderableWidget for ScoreTable {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height < SCORE_TABLE_HEIGHT || (area.width as usize) < self.width() {
            return; // Not enough space
        }

        let chars = &config.box_chars;
        let headers: Vec<String> = self.headers().into_iter().map(str::to_string).collect();
        let lines = [
            self.border(&chars.top_left, &chars.top_junction, &chars.top_right, config),
            self.row("", &headers, config),
            self.border(&chars.left_junction, &chars.cross, &chars.right_junction, config),
            self.row(&self.away_team, &self.team_cells(&self.away_periods, self.away_score), config),
            self.row(&self.home_team, &self.team_cells(&self.home_periods, self.home_score), config),
            self.border(&chars.bottom_left, &chars.bottom_junction, &chars.bottom_right, config),
        ];

        let style = self.get_style(config);
        for (y, line) in (area.y..).zip(lines.iter()) {
            buf.set_string(area.x, y, line, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(SCORE_TABLE_HEIGHT)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(self.width() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::tui::testing::assert_buffer;
    use crate::tui::widgets::testing::*;

    fn table_for(game: &crate::types::Game, current_period: Option<Period>) -> ScoreTable {
        let goals: Vec<&Goal> = game.goals.iter().collect();
        ScoreTable::from_goals(
            &game.away().abbreviation,
            &game.home().abbreviation,
            &goals,
            current_period,
            false,
        )
    }

    #[test]
    fn test_score_table_not_started() {
        let widget = table_for(&fixtures::pre_game(), None);
        let buf = render_widget(&widget, 27, 6);

        assert_buffer(
            &buf,
            &[
                "╭─────┬────┬────┬────┬────╮",
                "│     │ 1  │ 2  │ 3  │ T  │",
                "├─────┼────┼────┼────┼────┤",
                "│ TOR │ -  │ -  │ -  │ -  │",
                "│ MTL │ -  │ -  │ -  │ -  │",
                "╰─────┴────┴────┴────┴────╯",
            ],
        );
    }

    #[test]
    fn test_score_table_live_hides_future_periods() {
        let widget = table_for(&fixtures::live_game(), Some(Period::Regular(2)));
        let buf = render_widget(&widget, 27, 6);

        assert_buffer(
            &buf,
            &[
                "╭─────┬────┬────┬────┬────╮",
                "│     │ 1  │ 2  │ 3  │ T  │",
                "├─────┼────┼────┼────┼────┤",
                "│ BOS │ 1  │ 0  │ -  │ 1  │",
                "│ NYR │ 0  │ 1  │ -  │ 1  │",
                "╰─────┴────┴────┴────┴────╯",
            ],
        );
    }

    #[test]
    fn test_score_table_final() {
        let widget = table_for(&fixtures::final_game(), Some(Period::Regular(3)));
        let buf = render_widget(&widget, 27, 6);

        assert_buffer(
            &buf,
            &[
                "╭─────┬────┬────┬────┬────╮",
                "│     │ 1  │ 2  │ 3  │ T  │",
                "├─────┼────┼────┼────┼────┤",
                "│ EDM │ 1  │ 1  │ 1  │ 3  │",
                "│ VAN │ 1  │ 0  │ 0  │ 1  │",
                "╰─────┴────┴────┴────┴────╯",
            ],
        );
    }

    #[test]
    fn test_score_table_overtime() {
        let widget = table_for(&fixtures::overtime_game(), Some(Period::Overtime(1)));
        let buf = render_widget(&widget, 32, 6);

        assert_buffer(
            &buf,
            &[
                "╭─────┬────┬────┬────┬────┬────╮",
                "│     │ 1  │ 2  │ 3  │ OT │ T  │",
                "├─────┼────┼────┼────┼────┼────┤",
                "│ DAL │ 1  │ 0  │ 0  │ 0  │ 1  │",
                "│ COL │ 0  │ 0  │ 1  │ 1  │ 2  │",
                "╰─────┴────┴────┴────┴────┴────╯",
            ],
        );
    }

    #[test]
    fn test_score_table_shootout() {
        let widget = table_for(&fixtures::shootout_game(), Some(Period::Shootout));
        assert_eq!(widget.preferred_width(), Some(37));
        let buf = render_widget(&widget, 37, 6);

        assert_buffer(
            &buf,
            &[
                "╭─────┬────┬────┬────┬────┬────┬────╮",
                "│     │ 1  │ 2  │ 3  │ OT │ SO │ T  │",
                "├─────┼────┼────┼────┼────┼────┼────┤",
                "│ CAR │ 1  │ 0  │ 0  │ 0  │ 2  │ 2  │",
                "│ NJD │ 0  │ 1  │ 0  │ 0  │ 1  │ 1  │",
                "╰─────┴────┴────┴────┴────┴────┴────╯",
            ],
        );
    }

    #[test]
    fn test_score_table_partial_goals() {
        let game = fixtures::final_game();
        let early: Vec<&Goal> = game.goals.iter().take(1).collect();
        let widget = ScoreTable::from_goals("EDM", "VAN", &early, Some(Period::Regular(1)), false);
        assert_eq!(widget.away_score, Some(1));
        assert_eq!(widget.home_score, Some(0));
    }

    #[test]
    fn test_score_table_ascii() {
        let widget = table_for(&fixtures::pre_game(), None);
        let buf = render_widget_with_config(&widget, 27, 6, &test_config_ascii());
        assert_eq!(buffer_line(&buf, 0), "+-----+----+----+----+----+");
        assert_eq!(buffer_line(&buf, 3), "| TOR | -  | -  | -  | -  |");
    }

    #[test]
    fn test_score_table_too_narrow_renders_nothing() {
        let widget = table_for(&fixtures::final_game(), Some(Period::Regular(3)));
        let buf = render_widget(&widget, 20, 6);
        assert_eq!(buffer_line(&buf, 0).trim(), "");
    }
}
