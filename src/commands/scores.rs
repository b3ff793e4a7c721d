use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::format_card;
use crate::config::{self, Config, DisplayConfig};
use crate::data_provider;
use crate::formatting::format_header;
use crate::playback::PlaybackPhase;
use crate::toggles::{Toggle, ToggleStore};
use crate::tui::widgets::GameCard;
use crate::types::Scores;

/// Fetch the feed once and print every game card, without playback
pub async fn run(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let source = data_provider::from_config(config, file).context("Cannot load scores")?;
    let scores = source
        .fetch_scores()
        .await
        .with_context(|| format!("Failed to fetch scores from {}", source.describe()))?;
    info!("SCORES: {} games from {}", scores.games.len(), source.describe());

    let toggles = ToggleStore::load(config::get_state_path());
    print!("{}", format_scores(&scores, &toggles, &config.display()));
    Ok(())
}

/// Header plus one card per game, honouring the persisted card toggles
pub fn format_scores(scores: &Scores, toggles: &ToggleStore, display: &DisplayConfig) -> String {
    let title = match &scores.date {
        Some(date) => format!("SCORES - {}", date.pretty),
        None => "SCORES".to_string(),
    };
    let mut output = format_header(&title, true, display);

    if scores.games.is_empty() {
        output.push_str("\nNo games scheduled.\n");
        return output;
    }

    for (i, game) in scores.games.iter().enumerate() {
        let card = GameCard::new(
            game,
            PlaybackPhase::Skipped,
            toggles.is_on(Toggle::Stats, i),
            toggles.is_on(Toggle::Goals, i),
            false,
        );
        output.push('\n');
        output.push_str(&format_card(&card, display));
    }
    output
}
