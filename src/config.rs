use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use ratatui::style::{Color, Modifier};
use crate::formatting::BoxChars;

/// Modifier applied on top of the selection colour for the focused card
pub const SELECTION_STYLE_MODIFIER: Modifier = Modifier::BOLD;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub refresh_interval: u32,
    /// HTTP location of the scores feed
    pub feed_url: Option<String>,
    /// Local scores feed, used when no URL is configured
    pub feed_file: Option<PathBuf>,
    pub time_format: String,
    pub use_unicode: bool,
    pub playback: PlaybackConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PlaybackConfig {
    pub enabled: bool,
    /// Milliseconds between two clock ticks
    pub tick_millis: u64,
    /// Game seconds the clock advances per tick
    pub step_seconds: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub highlight_fg: Color,
    #[serde(deserialize_with = "deserialize_color_optional")]
    pub unfocused_selection_fg: Option<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            feed_url: None,
            feed_file: None,
            time_format: "%H:%M".to_string(),
            use_unicode: true,
            playback: PlaybackConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            enabled: true,
            tick_millis: 50,
            step_seconds: 60,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: Color::Rgb(255, 165, 0), // Orange
            highlight_fg: Color::Rgb(159, 226, 191), // Seafoam
            unfocused_selection_fg: None,
        }
    }
}

impl ThemeConfig {
    /// Get the unfocused selection color, calculating 50% darker if not explicitly set
    pub fn unfocused_selection_fg(&self) -> Color {
        self.unfocused_selection_fg.unwrap_or_else(|| darken_color(self.selection_fg, 0.5))
    }
}

impl Config {
    /// Rendering settings derived from this configuration
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            selection_fg: self.theme.selection_fg,
            unfocused_selection_fg: self.theme.unfocused_selection_fg(),
            highlight_fg: self.theme.highlight_fg,
            error_fg: Color::Red,
            time_format: self.time_format.clone(),
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

/// Everything a widget needs to know about presentation
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub selection_fg: Color,
    pub unfocused_selection_fg: Color,
    /// Colour of the better value in a stat comparison
    pub highlight_fg: Color,
    pub error_fg: Color,
    pub time_format: String,
    pub box_chars: BoxChars,
}

impl DisplayConfig {
    /// Colour of the selected card, dimmed while the terminal is in the background
    pub fn selection_color(&self, focused: bool) -> Color {
        if focused {
            self.selection_fg
        } else {
            self.unfocused_selection_fg
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

/// Darken a color by a given factor (0.0 = black, 1.0 = original)
fn darken_color(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let r = (r as f32 * factor) as u8;
            let g = (g as f32 * factor) as u8;
            let b = (b as f32 * factor) as u8;
            Color::Rgb(r, g, b)
        }
        other => other,
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Deserialize an optional color from a string
fn deserialize_color_optional<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(color_str) => {
            let color = parse_color(&color_str)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", color_str)))?;
            Ok(Some(color))
        }
        None => Ok(None),
    }
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "blue", "cyan", "orange", etc.
/// - Hex colors: "#FF6600", "#f60"
/// - RGB tuples: "255,165,0"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    let named = match s.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "orange" => Some(Color::Rgb(255, 165, 0)),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    if let Some(hex) = s.strip_prefix('#') {
        return match hex.len() {
            6 => Some(Color::Rgb(
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => Some(Color::Rgb(
                u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?,
                u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?,
                u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?,
            )),
            _ => None,
        };
    }

    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() == 3 {
        let r = parts[0].trim().parse::<u8>().ok()?;
        let g = parts[1].trim().parse::<u8>().ok()?;
        let b = parts[2].trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

fn base_directories() -> BaseDirectories {
    BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"))
}

pub fn get_config_path() -> Option<PathBuf> {
    let config_home = base_directories().get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Location of persisted UI toggles
pub fn get_state_path() -> Option<PathBuf> {
    let state_home = base_directories().get_state_home()?;
    Some(state_home.join("toggles.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content)
}

/// Parse configuration text, falling back to defaults when it is invalid
pub fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Invalid configuration, using defaults: {}", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#FF6600"), Some(Color::Rgb(255, 102, 0)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("255, 102, 0"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
    }

    #[test]
    fn test_unfocused_selection_defaults_to_darker() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.unfocused_selection_fg(), Color::Rgb(127, 82, 0));
    }

    #[test]
    fn test_config_from_toml() {
        let config = parse(
            r##"
refresh_interval = 30
feed_url = "https://example.com/api/scores/latest"
use_unicode = false

[playback]
enabled = false

[theme]
highlight_fg = "#00FFFF"
        "##,
        );

        assert_eq!(config.refresh_interval, 30);
        assert_eq!(config.feed_url.as_deref(), Some("https://example.com/api/scores/latest"));
        assert!(!config.playback.enabled);
        assert_eq!(config.playback.step_seconds, 60);
        assert_eq!(config.theme.highlight_fg, Color::Rgb(0, 255, 255));
        assert_eq!(config.theme.selection_fg, Color::Rgb(255, 165, 0));

        let display = config.display();
        assert_eq!(display.box_chars, BoxChars::ascii());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = parse("refresh_interval = \"soon\"");
        assert_eq!(config.refresh_interval, 60);
        assert!(config.use_unicode);
    }
}
