/// Testing utilities for widget rendering
///
/// This module provides helper functions for testing widgets in isolation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
};
use crate::config::DisplayConfig;
use crate::formatting::BoxChars;
use super::RenderableWidget;

/// Create a test DisplayConfig with unicode box characters
pub fn test_config() -> DisplayConfig {
    DisplayConfig {
        use_unicode: true,
        selection_fg: Color::Rgb(255, 200, 0), // Gold
        unfocused_selection_fg: Color::Rgb(127, 100, 0),
        highlight_fg: Color::Rgb(159, 226, 191), // Seafoam
        error_fg: Color::Red,
        time_format: "%H:%M".to_string(),
        box_chars: BoxChars::unicode(),
    }
}

/// Create a test DisplayConfig with ASCII box characters
pub fn test_config_ascii() -> DisplayConfig {
    DisplayConfig {
        use_unicode: false,
        box_chars: BoxChars::ascii(),
        ..test_config()
    }
}

/// Render a widget to a buffer and return it for testing
pub fn render_widget(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
) -> Buffer {
    render_widget_with_config(widget, width, height, &test_config())
}

/// Render a widget to a buffer with a custom config
pub fn render_widget_with_config(
    widget: &impl RenderableWidget,
    width: u16,
    height: u16,
    config: &DisplayConfig,
) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    widget.render(buf.area, &mut buf, config);
    buf
}

/// Get the text content of a specific line in the buffer
pub fn buffer_line(buf: &Buffer, line: u16) -> String {
    let area = buf.area();
    (0..area.width).map(|x| buf[(x, line)].symbol()).collect()
}

/// Find the first line containing `needle`
pub fn find_line(buf: &Buffer, needle: &str) -> Option<u16> {
    (0..buf.area().height).find(|&y| buffer_line(buf, y).contains(needle))
}

/// Column of the first cell of `needle` on a line, counted in cells
pub fn find_column(buf: &Buffer, line: u16, needle: &str) -> Option<u16> {
    let text = buffer_line(buf, line);
    let byte_index = text.find(needle)?;
    Some(text[..byte_index].chars().count() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    struct TestWidget {
        text: String,
    }

    impl RenderableWidget for TestWidget {
        fn render(&self, area: Rect, buf: &mut Buffer, _config: &DisplayConfig) {
            buf.set_string(area.x, area.y, &self.text, Style::default());
        }
    }

    #[test]
    fn test_render_widget() {
        let widget = TestWidget {
            text: "Hello".to_string(),
        };

        let buf = render_widget(&widget, 10, 1);

        assert_eq!(buf[(0, 0)].symbol(), "H");
        assert_eq!(buf[(4, 0)].symbol(), "o");
        assert_eq!(buffer_line(&buf, 0), "Hello     ");
    }

    #[test]
    fn test_find_helpers() {
        let widget = TestWidget {
            text: "│ Hi │".to_string(),
        };

        let buf = render_widget(&widget, 8, 2);
        assert_eq!(find_line(&buf, "Hi"), Some(0));
        assert_eq!(find_column(&buf, 0, "Hi"), Some(2));
        assert_eq!(find_line(&buf, "Bye"), None);
    }

    #[test]
    fn test_config_creates_ascii() {
        let config = test_config_ascii();
        assert_eq!(config.box_chars.horizontal, "-");
        assert_eq!(config.box_chars.vertical, "|");
        assert_eq!(config.box_chars.top_left, "+");
    }
}
