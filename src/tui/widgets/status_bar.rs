/// StatusBar widget - displays status information and keyboard hints at the bottom of the screen
///
/// This widget renders a two-line status bar with:
/// - Top line: horizontal separator with connector aligned to the vertical bar
/// - Bottom line: left status message, error or key hints │ right refresh countdown
///
/// Error messages are displayed with the error color when present.

use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Fixed width of the countdown block: vertical bar, margin, 3 chars, margin
const COUNTDOWN_WIDTH: u16 = 6;

/// Represents a keyboard hint displayed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// The keyboard key (e.g., "q", "j/k")
    pub key: String,
    /// The action description (e.g., "Quit")
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Widget for displaying status information and keyboard hints
#[derive(Debug, Clone)]
pub struct StatusBar {
    /// Last successful refresh
    pub last_refresh: Option<SystemTime>,
    /// Refresh interval in seconds
    pub refresh_interval: u32,
    /// Refresh or toggle failure, shown in the error colour
    pub error_message: Option<String>,
    /// Transient informational message
    pub status_message: Option<String>,
    /// Shown when there is nothing else to say
    pub hints: Vec<KeyHint>,
}

impl StatusBar {
    /// Create a new StatusBar with the scoreboard key hints
    pub fn new() -> Self {
        Self {
            last_refresh: None,
            refresh_interval: 60,
            error_message: None,
            status_message: None,
            hints: vec![
                KeyHint::new("j/k", "Select"),
                KeyHint::new("s", "Stats"),
                KeyHint::new("g", "Goals"),
                KeyHint::new("Space", "Skip"),
                KeyHint::new("r", "Refresh"),
                KeyHint::new("q", "Quit"),
            ],
        }
    }

    pub fn with_last_refresh(mut self, last_refresh: Option<SystemTime>) -> Self {
        self.last_refresh = last_refresh;
        self
    }

    pub fn with_refresh_interval(mut self, refresh_interval: u32) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    pub fn with_error(mut self, error: Option<String>) -> Self {
        self.error_message = error;
        self
    }

    pub fn with_status(mut self, status: Option<String>) -> Self {
        self.status_message = status;
        self
    }

    pub fn with_hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Left side segments, highest priority first: error, status, hints
    fn left_segments(&self, config: &DisplayConfig) -> Vec<(String, Style)> {
        if let Some(msg) = &self.error_message {
            return vec![(format!("ERROR: {}", msg), Style::default().fg(config.error_fg))];
        }
        if let Some(msg) = &self.status_message {
            return vec![(msg.clone(), Style::default())];
        }

        let mut segments = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                segments.push(("  ".to_string(), Style::default()));
            }
            segments.push((hint.key.clone(), Style::default().add_modifier(Modifier::BOLD)));
            segments.push((format!(" {}", hint.action), Style::default()));
        }
        segments
    }

    /// Build the right side refresh countdown text (fixed 3-char width, right-aligned)
    fn build_right_text(&self) -> String {
        let Some(refresh_time) = self.last_refresh else {
            return "---".to_string();
        };
        match SystemTime::now().duration_since(refresh_time) {
            Ok(elapsed) => {
                let elapsed_secs = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
                let remaining = self.refresh_interval.saturating_sub(elapsed_secs);
                if remaining > 0 {
                    format!("{:>3}", remaining.min(999))
                } else {
                    "...".to_string()
                }
            }
            Err(_) => "  ?".to_string(),
        }
    }

    fn build_separator_line(&self, area_width: usize, bar_position: usize, config: &DisplayConfig) -> String {
        let horizontal = &config.box_chars.horizontal;
        format!(
            "{}{}{}",
            horizontal.repeat(bar_position),
            config.box_chars.top_junction,
            horizontal.repeat(area_width.saturating_sub(bar_position + 1))
        )
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.width == 0 || area.height < 2 {
            return;
        }

        // Layout: [margin][left content][padding]│ [3-char countdown]
        let bar_position = area.width.saturating_sub(COUNTDOWN_WIDTH);
        let separator = self.build_separator_line(area.width as usize, bar_position as usize, config);
        buf.set_stringn(area.x, area.y, &separator, area.width as usize, Style::default());

        let y = area.y + 1;
        let mut x = area.x + 1;
        let left_end = area.x + bar_position.saturating_sub(1);
        for (text, style) in self.left_segments(config) {
            if x >= left_end {
                break;
            }
            let (next_x, _) = buf.set_stringn(x, y, &text, (left_end - x) as usize, style);
            x = next_x;
        }

        let right = format!("{} {} ", config.box_chars.vertical, self.build_right_text());
        if right.width() as u16 <= area.width {
            buf.set_string(area.x + bar_position, y, &right, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2) // Separator line + status line
    }
}
