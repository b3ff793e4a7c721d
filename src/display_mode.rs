//! Which panels a game card shows
//!
//! A card's display mode follows from the game status and the playback
//! phase; each panel is shown when the mode belongs to that panel's set.

use crate::playback::{game_end, goal_clock, PlaybackPhase};
use crate::types::{Game, GameStatus, Goal, TeamStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Game has not started (preview or postponed)
    PreGame,
    /// Started game shown before playback begins
    PreSummary,
    /// Playback clock has not reached this game's end yet
    Playback,
    /// Live game shown without playback
    InProgress,
    /// Playback passed this live game's current time
    PostGameInProgress,
    /// Playback passed this finished game's end
    PostGameFinished,
    /// Finished game shown without playback
    Summary,
}

const LATEST_GOAL_MODES: &[DisplayMode] = &[
    DisplayMode::Playback,
    DisplayMode::InProgress,
    DisplayMode::PostGameInProgress,
    DisplayMode::PostGameFinished,
    DisplayMode::Summary,
];

const CLOCK_MODES: &[DisplayMode] = &[DisplayMode::Playback];

const GAME_STATS_MODES: &[DisplayMode] = &[
    DisplayMode::InProgress,
    DisplayMode::PostGameInProgress,
    DisplayMode::PostGameFinished,
    DisplayMode::Summary,
];

const PRE_GAME_STATS_MODES: &[DisplayMode] = &[DisplayMode::PreGame, DisplayMode::PreSummary];

const POST_GAME_STATS_MODES: &[DisplayMode] = &[DisplayMode::PostGameFinished, DisplayMode::Summary];

impl DisplayMode {
    pub const ALL: [DisplayMode; 7] = [
        DisplayMode::PreGame,
        DisplayMode::PreSummary,
        DisplayMode::Playback,
        DisplayMode::InProgress,
        DisplayMode::PostGameInProgress,
        DisplayMode::PostGameFinished,
        DisplayMode::Summary,
    ];

    pub fn resolve(game: &Game, phase: &PlaybackPhase) -> DisplayMode {
        if !game.status.has_started() {
            return DisplayMode::PreGame;
        }
        let live = game.status.is_live();
        let past_end = match phase {
            PlaybackPhase::NotStarted => return DisplayMode::PreSummary,
            PlaybackPhase::Skipped => {
                return if live { DisplayMode::InProgress } else { DisplayMode::Summary };
            }
            PlaybackPhase::Running(clock) => game_end(game).map_or(true, |end| *clock >= end),
            PlaybackPhase::Finished => true,
        };
        match (past_end, live) {
            (false, _) => DisplayMode::Playback,
            (true, true) => DisplayMode::PostGameInProgress,
            (true, false) => DisplayMode::PostGameFinished,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DisplayMode::PreGame => "pre-game",
            DisplayMode::PreSummary => "pre-summary",
            DisplayMode::Playback => "playback",
            DisplayMode::InProgress => "in-progress",
            DisplayMode::PostGameInProgress => "post-game-in-progress",
            DisplayMode::PostGameFinished => "post-game-finished",
            DisplayMode::Summary => "summary",
        }
    }
}

/// Source of the team comparison panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamStatsSource {
    PreGame,
    PostGame,
}

impl TeamStatsSource {
    /// Stats for this source, post-game falling back to pre-game
    pub fn select<'a>(&self, game: &'a Game) -> Option<&'a TeamStats> {
        match self {
            TeamStatsSource::PreGame => game.pre_game_stats.as_ref(),
            TeamStatsSource::PostGame => game.current_stats.as_ref().or(game.pre_game_stats.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    pub latest_goal: bool,
    pub clock: bool,
    pub status: bool,
    pub game_stats: bool,
    pub team_stats: Option<TeamStatsSource>,
}

impl Panels {
    pub fn for_mode(mode: DisplayMode) -> Panels {
        let team_stats = if PRE_GAME_STATS_MODES.contains(&mode) {
            Some(TeamStatsSource::PreGame)
        } else if POST_GAME_STATS_MODES.contains(&mode) {
            Some(TeamStatsSource::PostGame)
        } else {
            None
        };
        Panels {
            latest_goal: LATEST_GOAL_MODES.contains(&mode),
            clock: CLOCK_MODES.contains(&mode),
            status: !CLOCK_MODES.contains(&mode),
            game_stats: GAME_STATS_MODES.contains(&mode),
            team_stats,
        }
    }
}

/// Goals a card may show in the given mode
pub fn visible_goals<'a>(game: &'a Game, mode: DisplayMode, phase: &PlaybackPhase) -> Vec<&'a Goal> {
    match mode {
        DisplayMode::PreGame | DisplayMode::PreSummary => Vec::new(),
        DisplayMode::Playback => match phase {
            PlaybackPhase::Running(clock) => game.goals.iter().filter(|g| goal_clock(g) <= *clock).collect(),
            _ => game.goals.iter().collect(),
        },
        _ => game.goals.iter().collect(),
    }
}

/// Status line for a game outside playback: "Final (OT)", "2nd 08:42", start time
pub fn status_text(game: &Game, time_format: &str) -> String {
    match &game.status {
        GameStatus::Final if game.has_shootout() => "Final (SO)".to_string(),
        GameStatus::Final if game.has_overtime() => "Final (OT)".to_string(),
        GameStatus::Final => "Final".to_string(),
        GameStatus::Live { progress } => crate::formatting::format_time_remaining(progress),
        GameStatus::Postponed => "Postponed".to_string(),
        GameStatus::Preview => game
            .start_time
            .as_deref()
            .and_then(|t| crate::formatting::format_start_time(t, time_format))
            .unwrap_or_else(|| "Scheduled".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::playback::GameClock;
    use crate::types::Period;

    #[test]
    fn test_not_started_games_are_pre_game() {
        for phase in [PlaybackPhase::NotStarted, PlaybackPhase::Finished, PlaybackPhase::Skipped] {
            assert_eq!(DisplayMode::resolve(&fixtures::pre_game(), &phase), DisplayMode::PreGame);
            assert_eq!(DisplayMode::resolve(&fixtures::postponed_game(), &phase), DisplayMode::PreGame);
        }
    }

    #[test]
    fn test_resolve_by_phase() {
        let live = fixtures::live_game();
        let done = fixtures::final_game();

        assert_eq!(DisplayMode::resolve(&done, &PlaybackPhase::NotStarted), DisplayMode::PreSummary);
        assert_eq!(DisplayMode::resolve(&live, &PlaybackPhase::Skipped), DisplayMode::InProgress);
        assert_eq!(DisplayMode::resolve(&done, &PlaybackPhase::Skipped), DisplayMode::Summary);
        assert_eq!(DisplayMode::resolve(&live, &PlaybackPhase::Finished), DisplayMode::PostGameInProgress);
        assert_eq!(DisplayMode::resolve(&done, &PlaybackPhase::Finished), DisplayMode::PostGameFinished);
    }

    #[test]
    fn test_running_clock_against_game_end() {
        let live = fixtures::live_game(); // ends at 2nd, 11:18 elapsed
        let before = PlaybackPhase::Running(GameClock { period: Period::Regular(2), elapsed: 60 });
        let after = PlaybackPhase::Running(GameClock { period: Period::Regular(3), elapsed: 0 });
        assert_eq!(DisplayMode::resolve(&live, &before), DisplayMode::Playback);
        assert_eq!(DisplayMode::resolve(&live, &after), DisplayMode::PostGameInProgress);
    }

    #[test]
    fn test_panel_membership() {
        let pre = Panels::for_mode(DisplayMode::PreGame);
        assert!(!pre.latest_goal && pre.status && !pre.game_stats);
        assert_eq!(pre.team_stats, Some(TeamStatsSource::PreGame));

        let playback = Panels::for_mode(DisplayMode::Playback);
        assert!(playback.latest_goal && playback.clock && !playback.status);
        assert_eq!(playback.team_stats, None);

        let finished = Panels::for_mode(DisplayMode::PostGameFinished);
        assert!(finished.latest_goal && finished.game_stats);
        assert_eq!(finished.team_stats, Some(TeamStatsSource::PostGame));

        let live = Panels::for_mode(DisplayMode::InProgress);
        assert!(live.game_stats && live.status);
        assert_eq!(live.team_stats, None);

        for mode in DisplayMode::ALL {
            let panels = Panels::for_mode(mode);
            assert_ne!(panels.clock, panels.status, "{} shows exactly one of clock/status", mode.name());
        }
    }

    #[test]
    fn test_visible_goals_follow_clock() {
        let game = fixtures::final_game();
        let early = PlaybackPhase::Running(GameClock { period: Period::Regular(1), elapsed: 10 * 60 });

        assert!(visible_goals(&game, DisplayMode::PreSummary, &PlaybackPhase::NotStarted).is_empty());
        let shown = visible_goals(&game, DisplayMode::Playback, &early);
        assert!(shown.iter().all(|g| goal_clock(g) <= GameClock { period: Period::Regular(1), elapsed: 600 }));
        assert!(shown.len() < game.goals.len());
        assert_eq!(visible_goals(&game, DisplayMode::Summary, &PlaybackPhase::Skipped).len(), game.goals.len());
    }

    #[test]
    fn test_post_game_source_falls_back() {
        let mut game = fixtures::final_game();
        assert!(TeamStatsSource::PostGame.select(&game).is_some());
        game.current_stats = None;
        assert_eq!(TeamStatsSource::PostGame.select(&game), game.pre_game_stats.as_ref());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&fixtures::final_game(), "%H:%M"), "Final");
        assert_eq!(status_text(&fixtures::overtime_game(), "%H:%M"), "Final (OT)");
        assert_eq!(status_text(&fixtures::shootout_game(), "%H:%M"), "Final (SO)");
        assert_eq!(status_text(&fixtures::live_game(), "%H:%M"), "2nd 08:42");
        assert_eq!(status_text(&fixtures::postponed_game(), "%H:%M"), "Postponed");
    }
}
