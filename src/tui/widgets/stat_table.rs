/// StatTable widget - side-by-side comparison of team or game statistics
///
/// The better value of each row is drawn in the highlight colour.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::layout_constants::{STAT_LABEL_WIDTH, STAT_VALUE_WIDTH};
use crate::stats::{Highlight, StatRow};
use crate::tui::widgets::RenderableWidget;

#[derive(Debug, Clone)]
pub struct StatTable {
    pub title: &'static str,
    pub away_team: String,
    pub home_team: String,
    pub rows: Vec<StatRow>,
}

impl StatTable {
    pub fn new(title: &'static str, away_team: &str, home_team: &str, rows: Vec<StatRow>) -> Self {
        Self {
            title,
            away_team: away_team.to_string(),
            home_team: home_team.to_string(),
            rows,
        }
    }

    fn width() -> usize {
        1 + STAT_LABEL_WIDTH + 2 * STAT_VALUE_WIDTH
    }
}

/// Write `text` right-aligned in a column ending at `right`
fn set_right_aligned(buf: &mut Buffer, right: u16, y: u16, text: &str, style: Style) {
    let width = text.width().min(STAT_VALUE_WIDTH - 1) as u16;
    buf.set_stringn(right.saturating_sub(width), y, text, STAT_VALUE_WIDTH - 1, style);
}

impl RenderableWidget for StatTable {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if self.rows.is_empty() || (area.width as usize) < Self::width() {
            return;
        }

        let away_right = area.x + (1 + STAT_LABEL_WIDTH + STAT_VALUE_WIDTH) as u16;
        let home_right = away_right + STAT_VALUE_WIDTH as u16;
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let highlighted = Style::default().fg(config.highlight_fg).add_modifier(Modifier::BOLD);

        let mut y = area.y;
        buf.set_stringn(area.x + 1, y, self.title, STAT_LABEL_WIDTH, bold);
        set_right_aligned(buf, away_right, y, &self.away_team, bold);
        set_right_aligned(buf, home_right, y, &self.home_team, bold);

        for row in &self.rows {
            y += 1;
            if y >= area.bottom() {
                break;
            }
            let (away_style, home_style) = match row.highlight {
                Highlight::Away => (highlighted, Style::default()),
                Highlight::Home => (Style::default(), highlighted),
                Highlight::Neither => (Style::default(), Style::default()),
            };
            buf.set_stringn(area.x + 1, y, row.label, STAT_LABEL_WIDTH, Style::default());
            set_right_aligned(buf, away_right, y, &row.away, away_style);
            set_right_aligned(buf, home_right, y, &row.home, home_style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        if self.rows.is_empty() {
            Some(0)
        } else {
            Some(1 + self.rows.len() as u16)
        }
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(Self::width() as u16)
    }
}
