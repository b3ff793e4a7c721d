/// Scoreboard widget - title line plus the vertical list of game cards
///
/// The list scrolls so that the selected card is always fully visible when
/// it fits the area.
use ratatui::{buffer::Buffer, layout::Rect, style::{Modifier, Style}};

use crate::config::DisplayConfig;
use crate::layout_constants::GAME_CARD_MARGIN;
use crate::playback::PlaybackPhase;
use crate::toggles::{Toggle, ToggleStore};
use crate::tui::widgets::{GameCard, RenderableWidget};
use crate::types::Scores;

/// Title line plus one blank row
const TITLE_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct Scoreboard<'a> {
    /// None until the first snapshot arrives
    pub scores: Option<&'a Scores>,
    pub phase: PlaybackPhase,
    pub toggles: &'a ToggleStore,
    pub selected: usize,
    /// Terminal has focus
    pub focused: bool,
    pub stale: bool,
}

impl<'a> Scoreboard<'a> {
    pub fn cards(&self) -> Vec<GameCard<'a>> {
        let Some(scores) = self.scores else {
            return Vec::new();
        };
        scores
            .games
            .iter()
            .enumerate()
            .map(|(i, game)| {
                GameCard::new(
                    game,
                    self.phase,
                    self.toggles.is_on(Toggle::Stats, i),
                    self.toggles.is_on(Toggle::Goals, i),
                    i == self.selected,
                )
                .with_focus(self.focused)
            })
            .collect()
    }

    fn title(&self) -> String {
        let date = self
            .scores
            .and_then(|s| s.date.as_ref())
            .map(|d| format!(" - {}", d.pretty))
            .unwrap_or_default();
        let stale = if self.stale { " (stale)" } else { "" };
        format!(" Scores{}{}", date, stale)
    }

    fn placeholder(&self) -> Option<&'static str> {
        match self.scores {
            None => Some(" Loading scores..."),
            Some(scores) if scores.games.is_empty() => Some(" No games scheduled"),
            Some(_) => None,
        }
    }
}

/// Index of the first card to draw so that `selected` ends inside `available` rows
fn first_visible(heights: &[u16], available: u16, selected: usize) -> usize {
    let selected = selected.min(heights.len().saturating_sub(1));
    let span = |first: usize| -> u16 {
        heights[first..=selected]
            .iter()
            .map(|h| h + GAME_CARD_MARGIN)
            .sum()
    };
    let mut first = 0;
    while first < selected && span(first) > available {
        first += 1;
    }
    first
}

impl RenderableWidget for Scoreboard<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if area.height == 0 {
            return;
        }
        let width = area.width as usize;
        buf.set_stringn(area.x, area.y, self.title(), width, Style::default().add_modifier(Modifier::BOLD));

        if area.height <= TITLE_HEIGHT {
            return;
        }
        let top = area.y + TITLE_HEIGHT;
        if let Some(text) = self.placeholder() {
            buf.set_stringn(area.x, top, text, width, Style::default());
            return;
        }

        let cards = self.cards();
        let heights: Vec<u16> = cards.iter().map(|c| c.preferred_height().unwrap_or(0)).collect();
        let first = first_visible(&heights, area.bottom() - top, self.selected);

        let mut y = top;
        for (card, height) in cards.iter().zip(&heights).skip(first) {
            if y >= area.bottom() {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, (*height).min(area.bottom() - y));
            card.render(card_area, buf, config);
            y = y.saturating_add(height + GAME_CARD_MARGIN);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        if self.placeholder().is_some() {
            return Some(TITLE_HEIGHT + 1);
        }
        let cards: u16 = self
            .cards()
            .iter()
            .map(|c| c.preferred_height().unwrap_or(0) + GAME_CARD_MARGIN)
            .sum();
        Some(TITLE_HEIGHT + cards)
    }
}
