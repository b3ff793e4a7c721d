use tracing::{debug, warn};

use super::action::{Action, Effect};
use super::state::AppState;
use crate::playback::Playback;
use crate::toggles::Toggle;
use crate::SharedData;

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here apart from persisting a flipped toggle; the refresh
/// request is returned as `Effect` to be executed by the main loop.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::DataUpdated(snapshot) => (reduce_data_updated(state, snapshot), Effect::None),

        Action::Tick => {
            let mut new_state = state;
            if let Some(playback) = new_state.playback.as_mut() {
                playback.tick();
            }
            (new_state, Effect::None)
        }

        Action::FocusChanged(focused) => {
            let mut new_state = state;
            new_state.ui.focus_lost = !focused;
            (new_state, Effect::None)
        }

        Action::SelectNext => {
            let mut new_state = state;
            let last = new_state.game_count().saturating_sub(1);
            new_state.ui.selected = (new_state.ui.selected + 1).min(last);
            (new_state, Effect::None)
        }

        Action::SelectPrevious => {
            let mut new_state = state;
            new_state.ui.selected = new_state.ui.selected.saturating_sub(1);
            (new_state, Effect::None)
        }

        Action::ToggleStats => (reduce_toggle(state, Toggle::Stats), Effect::None),
        Action::ToggleGoals => (reduce_toggle(state, Toggle::Goals), Effect::None),

        Action::SkipPlayback => {
            let mut new_state = state;
            if let Some(playback) = new_state.playback.as_mut() {
                debug!("PLAYBACK: Skipped by user");
                playback.skip();
            }
            (new_state, Effect::None)
        }

        Action::RefreshData => {
            let mut new_state = state;
            new_state.ui.status_message = Some("Refreshing...".to_string());
            (new_state, Effect::Refresh)
        }

        Action::Quit => (state, Effect::None),
    }
}

fn reduce_data_updated(state: AppState, snapshot: SharedData) -> AppState {
    let mut new_state = state;

    if new_state.playback.is_none() {
        if let Some(scores) = snapshot.scores.as_ref() {
            new_state.playback = Some(if new_state.system.playback_enabled {
                Playback::new(scores, new_state.system.step_seconds)
            } else {
                Playback::skipped()
            });
            debug!("PLAYBACK: Created for {} games", scores.games.len());
        }
    }

    if snapshot.generation != new_state.data.generation {
        // a new snapshot supersedes the refresh message
        new_state.ui.status_message = None;
    }

    new_state.data.scores = snapshot.scores;
    new_state.data.generation = snapshot.generation;
    new_state.data.stale = snapshot.stale;
    new_state.data.last_refresh = snapshot.last_refresh;
    new_state.data.error_message = snapshot.error_message;

    let last = new_state.game_count().saturating_sub(1);
    new_state.ui.selected = new_state.ui.selected.min(last);
    new_state
}

fn reduce_toggle(state: AppState, toggle: Toggle) -> AppState {
    let mut new_state = state;
    if new_state.game_count() == 0 {
        return new_state;
    }

    let index = new_state.ui.selected;
    new_state.ui.status_message = match new_state.toggles.flip(toggle, index) {
        Ok(_) => None,
        Err(e) => {
            warn!("TOGGLE: {:#}", e);
            Some(format!("Could not save toggle: {:#}", e))
        }
    };
    new_state
}
