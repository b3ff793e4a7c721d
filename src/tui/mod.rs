// Module declarations
pub mod widgets;

pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;

#[cfg(test)]
pub mod testing;

pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;

use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::{Config, DisplayConfig};
use crate::toggles::ToggleStore;
use crate::SharedDataHandle;
use widgets::{RenderableWidget, Scoreboard, StatusBar};

/// Main entry point for TUI mode
pub async fn run(
    shared_data: SharedDataHandle,
    refresh_tx: mpsc::Sender<()>,
    config: Config,
    toggles: ToggleStore,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, shared_data, refresh_tx, &config, toggles).await;

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    shared_data: SharedDataHandle,
    refresh_tx: mpsc::Sender<()>,
    config: &Config,
    toggles: ToggleStore,
) -> Result<(), io::Error> {
    let display = config.display();
    let mut ticks = TickTimer::new(Duration::from_millis(config.playback.tick_millis.max(1)), Instant::now());
    let mut state = AppState::new(config, toggles);

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        // Pick up a new snapshot or a new refresh error from the background task
        let snapshot = {
            let data = shared_data.read().await;
            let changed = data.generation != state.data.generation
                || data.error_message != state.data.error_message;
            changed.then(|| data.clone())
        };
        if let Some(snapshot) = snapshot {
            tracing::debug!("LOOP: Snapshot generation {}", snapshot.generation);
            state = reduce(state, Action::DataUpdated(snapshot)).0;
        }

        #[cfg_attr(not(feature = "development"), allow(unused_variables))]
        let frame = terminal.draw(|f| draw(f, &state, &display))?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            let filename = format!("scoreboard-screenshot-{}.txt", timestamp);
            if let Err(e) = crate::dev::screenshot::save_screenshot(frame.buffer, &filename) {
                tracing::error!("Failed to save screenshot: {}", e);
            } else {
                tracing::info!("Screenshot saved to {}", filename);
            }
        }

        // Wait for input no longer than the next playback tick
        if event::poll(ticks.timeout(Instant::now()))? {
            let action = match event::read()? {
                Event::FocusGained => Some(Action::FocusChanged(true)),
                Event::FocusLost => Some(Action::FocusChanged(false)),
                Event::Key(key) => {
                    #[cfg(feature = "development")]
                    {
                        use crossterm::event::{KeyCode, KeyModifiers};
                        if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                            tracing::info!("Screenshot requested via Shift-S");
                            screenshot_requested = true;
                        }
                    }
                    key_to_action(key, &state)
                }
                _ => None,
            };

            if let Some(action) = action {
                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
                let (new_state, effect) = reduce(state, action);
                state = new_state;
                if effect == Effect::Refresh {
                    if let Err(e) = refresh_tx.try_send(()) {
                        tracing::warn!("Refresh request dropped: {}", e);
                    }
                }
            }
        }

        // Ticks follow wall time, so a stream of events cannot stall the clock
        if ticks.due(Instant::now()) && state.is_playing() {
            state = reduce(state, Action::Tick).0;
        }
    }

    Ok(())
}

/// Fixed-rate playback ticks measured against the last tick
#[derive(Debug, Clone, Copy)]
struct TickTimer {
    interval: Duration,
    last_tick: Instant,
}

impl TickTimer {
    fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, last_tick: now }
    }

    /// Time left until the next tick
    fn timeout(&self, now: Instant) -> Duration {
        self.interval
            .checked_sub(now.saturating_duration_since(self.last_tick))
            .unwrap_or(Duration::ZERO)
    }

    /// Whether a tick is due; restarts the interval when it is
    fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

/// Scoreboard on top, status bar on the last two rows
fn draw(f: &mut Frame, state: &AppState, display: &DisplayConfig) {
    let [board_area, status_area]: [Rect; 2] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(f.area());

    let board = Scoreboard {
        scores: state.scores(),
        phase: state.phase(),
        toggles: &state.toggles,
        selected: state.ui.selected,
        focused: !state.ui.focus_lost,
        stale: state.data.stale,
    };
    board.render(board_area, f.buffer_mut(), display);

    let status = StatusBar::new()
        .with_last_refresh(state.data.last_refresh)
        .with_refresh_interval(state.system.refresh_interval)
        .with_error(state.data.error_message.clone())
        .with_status(state.ui.status_message.clone());
    status.render(status_area, f.buffer_mut(), display);
}
