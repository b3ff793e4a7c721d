//! Every display mode of a game card, rendered from the fixture games

use anyhow::Result;

use crate::commands::format_card;
use crate::config::{Config, DisplayConfig};
use crate::display_mode::DisplayMode;
use crate::fixtures;
use crate::formatting::format_header;
use crate::playback::{GameClock, PlaybackPhase};
use crate::tui::widgets::GameCard;
use crate::types::{Game, Period};

/// One gallery card: a fixture game seen at a given playback phase
struct Exhibit {
    label: &'static str,
    game: Game,
    phase: PlaybackPhase,
}

fn exhibits() -> Vec<Exhibit> {
    let mid_first = PlaybackPhase::Running(GameClock { period: Period::Regular(1), elapsed: 600 });
    vec![
        Exhibit { label: "scheduled game", game: fixtures::pre_game(), phase: PlaybackPhase::NotStarted },
        Exhibit { label: "before playback", game: fixtures::final_game(), phase: PlaybackPhase::NotStarted },
        Exhibit { label: "mid-playback", game: fixtures::live_game(), phase: mid_first },
        Exhibit { label: "live, playback off", game: fixtures::live_game(), phase: PlaybackPhase::Skipped },
        Exhibit { label: "live, playback done", game: fixtures::live_game(), phase: PlaybackPhase::Finished },
        Exhibit { label: "final, playback done", game: fixtures::overtime_game(), phase: PlaybackPhase::Finished },
        Exhibit { label: "final, playback off", game: fixtures::shootout_game(), phase: PlaybackPhase::Skipped },
    ]
}

pub fn run(config: &Config) -> Result<()> {
    print!("{}", format_gallery(&config.display()));
    Ok(())
}

pub fn format_gallery(display: &DisplayConfig) -> String {
    let mut output = format_header("GAME CARD GALLERY", true, display);
    for exhibit in exhibits() {
        let card = GameCard::new(&exhibit.game, exhibit.phase, true, false, false);
        output.push('\n');
        output.push_str(&format_header(
            &format!("{} ({})", card.mode.name(), exhibit.label),
            false,
            display,
        ));
        output.push_str(&format_card(&card, display));
    }
    output
}
