/// Widget-based rendering for the scoreboard
///
/// Widgets render themselves directly into a ratatui Buffer. Game cards are
/// compositions of the smaller widgets below, and the same widgets back both
/// the interactive view and the one-shot commands.

#[cfg(test)]
pub mod testing;

pub mod score_table;
pub use score_table::ScoreTable;

pub mod goal_list;
pub use goal_list::GoalList;

pub mod stat_table;
pub use stat_table::StatTable;

pub mod game_card;
pub use game_card::GameCard;

pub mod scoreboard;
pub use scoreboard::Scoreboard;

pub mod status_bar;
pub use status_bar::StatusBar;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render themselves directly to a ratatui Buffer, avoiding string-based
/// intermediate representations, and compose by rendering children into
/// sub-areas.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);

    /// Get the preferred height of this widget
    ///
    /// Returns None if the widget can adapt to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Get the preferred width of this widget
    ///
    /// Returns None if the widget can adapt to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}

/// Render a widget at its preferred size and return the text lines, right-trimmed
///
/// Used by the non-interactive commands to print widgets to stdout.
pub fn render_to_lines(widget: &impl RenderableWidget, width: u16, config: &DisplayConfig) -> Vec<String> {
    let width = widget.preferred_width().unwrap_or(width).max(1);
    let height = widget.preferred_height().unwrap_or(1);
    if height == 0 {
        return Vec::new();
    }
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);

    (0..height)
        .map(|y| {
            let line: String = (0..width).map(|x| buf[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
