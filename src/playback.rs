//! Goal playback clock
//!
//! On startup the scoreboard replays the day: a clock runs from the opening
//! face-off to the latest point reached by any game, revealing goals as the
//! clock passes them.

use crate::formatting::{format_clock, period_label};
use crate::types::{Game, GameStatus, Goal, Period, Scores, REGULATION_PERIODS};

/// Regulation period length in seconds
pub const REGULATION_PERIOD_SECONDS: u32 = 20 * 60;

/// Regular-season overtime length in seconds
pub const REGULAR_SEASON_OT_SECONDS: u32 = 5 * 60;

/// A point in game time, ordered by period then elapsed seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameClock {
    pub period: Period,
    pub elapsed: u32,
}

impl GameClock {
    pub fn start() -> Self {
        GameClock {
            period: Period::Regular(1),
            elapsed: 0,
        }
    }

    /// Clock label counting down like the rink clock: "2nd 08:42", "SO"
    pub fn label(&self, playoff: bool) -> String {
        if self.period == Period::Shootout {
            return period_label(self.period);
        }
        let remaining = period_length(self.period, playoff).saturating_sub(self.elapsed);
        format!("{} {}", period_label(self.period), format_clock(remaining / 60, remaining % 60))
    }
}

pub fn period_length(period: Period, playoff: bool) -> u32 {
    match period {
        Period::Regular(_) => REGULATION_PERIOD_SECONDS,
        Period::Overtime(_) if playoff => REGULATION_PERIOD_SECONDS,
        Period::Overtime(_) => REGULAR_SEASON_OT_SECONDS,
        Period::Shootout => 0,
    }
}

/// Moment a goal was scored
pub fn goal_clock(goal: &Goal) -> GameClock {
    match goal {
        Goal::InPlay { period, min, sec, .. } => GameClock {
            period: *period,
            elapsed: min * 60 + sec,
        },
        Goal::Shootout { .. } => GameClock {
            period: Period::Shootout,
            elapsed: 0,
        },
    }
}

/// Latest game time a game has reached; None for games that have not started
pub fn game_end(game: &Game) -> Option<GameClock> {
    let playoff = game.is_playoff();
    match &game.status {
        GameStatus::Preview | GameStatus::Postponed => None,
        GameStatus::Live { progress } => {
            let period = if progress.current_period_ordinal == "SO" {
                Period::Shootout
            } else {
                Period::from_number(progress.current_period)
            };
            let remaining = &progress.current_period_time_remaining;
            let elapsed = period_length(period, playoff).saturating_sub(remaining.min * 60 + remaining.sec);
            Some(GameClock { period, elapsed })
        }
        GameStatus::Final => {
            if game.has_shootout() {
                return Some(GameClock {
                    period: Period::Shootout,
                    elapsed: 0,
                });
            }
            let overtime_winner = game
                .goals
                .iter()
                .filter(|g| matches!(g.period(), Period::Overtime(_)))
                .map(goal_clock)
                .max();
            Some(overtime_winner.unwrap_or(GameClock {
                period: Period::Regular(REGULATION_PERIODS),
                elapsed: REGULATION_PERIOD_SECONDS,
            }))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    NotStarted,
    Running(GameClock),
    Finished,
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    phase: PlaybackPhase,
    end: Option<GameClock>,
    step_seconds: u32,
    playoff: bool,
}

impl Playback {
    pub fn new(scores: &Scores, step_seconds: u32) -> Self {
        let end = scores.games.iter().filter_map(game_end).max();
        let playoff = scores.games.iter().any(Game::is_playoff);
        let phase = if end.is_some() {
            PlaybackPhase::NotStarted
        } else {
            PlaybackPhase::Finished
        };
        Playback {
            phase,
            end,
            step_seconds: step_seconds.max(1),
            playoff,
        }
    }

    /// Playback that is never shown
    pub fn skipped() -> Self {
        Playback {
            phase: PlaybackPhase::Skipped,
            end: None,
            step_seconds: 1,
            playoff: false,
        }
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn end(&self) -> Option<GameClock> {
        self.end
    }

    pub fn is_playoff(&self) -> bool {
        self.playoff
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, PlaybackPhase::NotStarted | PlaybackPhase::Running(_))
    }

    /// Advance the clock by one step; returns whether anything changed
    pub fn tick(&mut self) -> bool {
        let Some(end) = self.end else {
            return false;
        };
        let next = match self.phase {
            PlaybackPhase::NotStarted => GameClock::start(),
            PlaybackPhase::Running(clock) => self.advance(clock),
            PlaybackPhase::Finished | PlaybackPhase::Skipped => return false,
        };
        self.phase = if next >= end {
            PlaybackPhase::Finished
        } else {
            PlaybackPhase::Running(next)
        };
        true
    }

    pub fn skip(&mut self) {
        if self.is_running() {
            self.phase = PlaybackPhase::Skipped;
        }
    }

    /// Label of the running clock, if any
    pub fn clock_label(&self) -> Option<String> {
        match self.phase {
            PlaybackPhase::Running(clock) => Some(clock.label(self.playoff)),
            _ => None,
        }
    }

    fn advance(&self, clock: GameClock) -> GameClock {
        let length = period_length(clock.period, self.playoff);
        let elapsed = clock.elapsed + self.step_seconds;
        if elapsed < length {
            return GameClock { period: clock.period, elapsed };
        }
        // land on the end of the period once before rolling over
        if clock.elapsed < length {
            return GameClock { period: clock.period, elapsed: length };
        }
        // a shootout end is reachable from any overtime
        let shootout_ahead = self.end.is_some_and(|end| end.period == Period::Shootout);
        let period = match clock.period {
            Period::Overtime(_) if !self.playoff || shootout_ahead => Period::Shootout,
            other => other.next(),
        };
        GameClock { period, elapsed: 0 }
    }
}
