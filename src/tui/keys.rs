/// Keyboard event to action mapping
///
/// This module handles converting crossterm KeyEvents into Actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::action::Action;
use super::state::AppState;

/// Handle global keys that work regardless of state
fn handle_global_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::RefreshData),
        _ => None,
    }
}

/// Handle playback keys; skipping only means something while the clock runs
fn handle_playback_keys(key_code: KeyCode, state: &AppState) -> Option<Action> {
    match key_code {
        KeyCode::Char(' ') | KeyCode::Esc if state.is_playing() => {
            debug!("KEY: Skipping playback");
            Some(Action::SkipPlayback)
        }
        _ => None,
    }
}

/// Handle card selection and card toggles
fn handle_card_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Char('s') => Some(Action::ToggleStats),
        KeyCode::Char('g') => Some(Action::ToggleGoals),
        _ => None,
    }
}

/// Convert a KeyEvent into an Action based on current application state
pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    trace!("KEY: {:?} (selected={}, playing={})", key.code, state.ui.selected, state.is_playing());

    handle_global_keys(key)
        .or_else(|| handle_playback_keys(key.code, state))
        .or_else(|| handle_card_keys(key.code))
}
