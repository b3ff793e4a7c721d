use crate::SharedData;

/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions.
/// Actions are dispatched from:
/// - User input (key events)
/// - The main loop (new snapshots, playback ticks, terminal focus)
#[derive(Debug, Clone)]
pub enum Action {
    /// A new snapshot (or a new refresh error) was published by the background task
    DataUpdated(SharedData),
    /// One playback step elapsed
    Tick,
    /// The terminal window gained (true) or lost (false) focus
    FocusChanged(bool),

    // Selection
    SelectNext,
    SelectPrevious,

    // Card toggles for the selected game
    ToggleStats,
    ToggleGoals,

    /// Jump straight to the current state of every game
    SkipPlayback,
    RefreshData,
    Quit,
}

/// Side effects requested by the reducer, executed by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Wake the background task for an immediate refresh
    Refresh,
}
