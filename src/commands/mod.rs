pub mod gallery;
pub mod scores;

use crate::config::DisplayConfig;
use crate::layout_constants::GAME_CARD_WIDTH;
use crate::tui::widgets::{render_to_lines, GameCard};

/// Text of one game card as printed by the commands
pub fn format_card(card: &GameCard, display: &DisplayConfig) -> String {
    let mut text = render_to_lines(card, GAME_CARD_WIDTH, display).join("\n");
    text.push('\n');
    text
}
