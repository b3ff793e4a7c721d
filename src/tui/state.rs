use std::sync::Arc;
use std::time::SystemTime;

use crate::config::Config;
use crate::playback::{Playback, PlaybackPhase};
use crate::toggles::ToggleStore;
use crate::types::Scores;

/// Root application state - single source of truth
///
/// All state changes happen through the reducer.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Latest snapshot from the background task
    pub data: DataState,

    /// Created from the first snapshot, then only advanced by ticks
    pub playback: Option<Playback>,

    pub ui: UiState,

    /// Persisted card toggles
    pub toggles: ToggleStore,

    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    // Wrapped in Arc to avoid deep clones on every reducer call
    pub scores: Arc<Option<Scores>>,
    pub generation: u64,
    pub stale: bool,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Index of the selected game card
    pub selected: usize,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// The terminal window is in the background
    pub focus_lost: bool,
}

#[derive(Debug, Clone)]
pub struct SystemState {
    pub playback_enabled: bool,
    pub step_seconds: u32,
    pub refresh_interval: u32,
}

impl Default for SystemState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SystemState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            playback_enabled: config.playback.enabled,
            step_seconds: config.playback.step_seconds,
            refresh_interval: config.refresh_interval,
        }
    }
}

impl AppState {
    pub fn new(config: &Config, toggles: ToggleStore) -> Self {
        Self {
            toggles,
            system: SystemState::from_config(config),
            ..Self::default()
        }
    }

    pub fn scores(&self) -> Option<&Scores> {
        self.data.scores.as_ref().as_ref()
    }

    pub fn game_count(&self) -> usize {
        self.scores().map_or(0, |s| s.games.len())
    }

    /// Phase the cards are drawn in; no playback yet reads as skipped
    pub fn phase(&self) -> PlaybackPhase {
        self.playback
            .as_ref()
            .map_or(PlaybackPhase::Skipped, Playback::phase)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(Playback::is_running)
    }
}
