/// GameCard widget - one game of the scoreboard
///
/// A composition widget: a header with both team names, a status or
/// playback clock line, the period score table, then the latest goal, the
/// optional full goal list and the stat comparisons selected by the card's
/// display mode.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::config::{DisplayConfig, SELECTION_STYLE_MODIFIER};
use crate::display_mode::{status_text, visible_goals, DisplayMode, Panels};
use crate::formatting::format_start_time;
use crate::layout_constants::GAME_CARD_WIDTH;
use crate::playback::{game_end, PlaybackPhase};
use crate::stats::{game_stat_rows, team_stat_rows};
use crate::tui::widgets::{GoalList, RenderableWidget, ScoreTable, StatTable};
use crate::types::{Game, Goal, Period};

/// Rows taken by the header and the status line
const CARD_HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct GameCard<'a> {
    pub game: &'a Game,
    pub mode: DisplayMode,
    pub phase: PlaybackPhase,
    /// Team and game stat panels expanded
    pub show_stats: bool,
    /// Full goal list below the latest goal
    pub all_goals: bool,
    pub selected: bool,
    pub focused: bool,
}

impl<'a> GameCard<'a> {
    pub fn new(game: &'a Game, phase: PlaybackPhase, show_stats: bool, all_goals: bool, selected: bool) -> Self {
        Self {
            game,
            mode: DisplayMode::resolve(game, &phase),
            phase,
            show_stats,
            all_goals,
            selected,
            focused: true,
        }
    }

    /// Dim the selection while the terminal is in the background
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn panels(&self) -> Panels {
        Panels::for_mode(self.mode)
    }

    fn goals(&self) -> Vec<&'a Goal> {
        visible_goals(self.game, self.mode, &self.phase)
    }

    /// Latest period the card shows scores for
    fn current_period(&self) -> Option<Period> {
        let end = game_end(self.game).map(|clock| clock.period);
        match (self.mode, self.phase) {
            (DisplayMode::PreGame | DisplayMode::PreSummary, _) => None,
            (DisplayMode::Playback, PlaybackPhase::Running(clock)) => end.map(|e| e.min(clock.period)),
            _ => end,
        }
    }

    fn status_line(&self, config: &DisplayConfig) -> String {
        if self.panels().clock {
            if let PlaybackPhase::Running(clock) = self.phase {
                return clock.label(self.game.is_playoff());
            }
        }
        match self.mode {
            DisplayMode::PreSummary => self
                .game
                .start_time
                .as_deref()
                .and_then(|t| format_start_time(t, &config.time_format))
                .map_or_else(|| "Starting".to_string(), |t| format!("Started {}", t)),
            _ => status_text(self.game, &config.time_format),
        }
    }

    fn header_line(&self, config: &DisplayConfig) -> String {
        let marker = if self.selected { config.box_chars.selector.as_str() } else { " " };
        format!(
            "{} {} @ {}",
            marker,
            self.game.away().display_name(),
            self.game.home().display_name()
        )
    }

    /// Child widgets below the status line, top to bottom
    fn sections(&self) -> Vec<Box<dyn RenderableWidget + 'a>> {
        let panels = self.panels();
        let goals = self.goals();
        let away = self.game.away().abbreviation.as_str();
        let home = self.game.home().abbreviation.as_str();

        let mut sections: Vec<Box<dyn RenderableWidget + 'a>> = vec![Box::new(ScoreTable::from_goals(
            away,
            home,
            &goals,
            self.current_period(),
            self.selected,
        ).with_focus(self.focused))];

        if panels.latest_goal {
            let full_list = self.all_goals && goals.len() > 1;
            sections.push(Box::new(GoalList::new(goals.clone(), false)));
            if full_list {
                sections.push(Box::new(GoalList::new(goals, true)));
            }
        }

        if self.show_stats {
            if let Some(stats) = self.game.game_stats.as_ref().filter(|_| panels.game_stats) {
                sections.push(Box::new(StatTable::new("Game stats", away, home, game_stat_rows(self.game, stats))));
            }
            if let Some(stats) = panels.team_stats.and_then(|source| source.select(self.game)) {
                sections.push(Box::new(StatTable::new("Team stats", away, home, team_stat_rows(self.game, stats))));
            }
        }

        sections
    }

    fn header_style(&self, config: &DisplayConfig) -> Style {
        if self.selected {
            Style::default().fg(config.selection_color(self.focused)).add_modifier(SELECTION_STYLE_MODIFIER)
        } else {
            Style::default().add_modifier(SELECTION_STYLE_MODIFIER)
        }
    }
}

impl RenderableWidget for GameCard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let width = area.width as usize;

        buf.set_stringn(area.x, area.y, self.header_line(config), width, self.header_style(config));
        if area.height > 1 {
            buf.set_stringn(area.x, area.y + 1, format!("  {}", self.status_line(config)), width, Style::default());
        }

        let mut y = area.y + CARD_HEADER_HEIGHT;
        for section in self.sections() {
            let height = section.preferred_height().unwrap_or(0);
            if height == 0 {
                continue;
            }
            if y >= area.bottom() {
                break;
            }
            let section_area = Rect::new(area.x, y, area.width, height.min(area.bottom() - y));
            section.render(section_area, buf, config);
            y += height;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        let sections: u16 = self
            .sections()
            .iter()
            .map(|s| s.preferred_height().unwrap_or(0))
            .sum();
        Some(CARD_HEADER_HEIGHT + sections)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(GAME_CARD_WIDTH)
    }
}
