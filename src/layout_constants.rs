//! Shared layout constants used across CLI and TUI rendering.

/// Height of the period score table
pub const SCORE_TABLE_HEIGHT: u16 = 6;

/// Width of a game card
pub const GAME_CARD_WIDTH: u16 = 60;

/// Blank rows between two game cards
pub const GAME_CARD_MARGIN: u16 = 1;

/// Width of team abbreviation column
pub const TEAM_ABBREV_COL_WIDTH: usize = 5;

/// Width of period score columns
pub const PERIOD_COL_WIDTH: usize = 4;

/// Width of the label column in stat comparison tables
pub const STAT_LABEL_WIDTH: usize = 14;

/// Width of each team column in stat comparison tables
pub const STAT_VALUE_WIDTH: usize = 10;

/// Width of the team column in goal lists
pub const GOAL_TEAM_WIDTH: usize = 5;

/// Width of the time column in goal lists ("2OT 12:34")
pub const GOAL_TIME_WIDTH: usize = 10;
