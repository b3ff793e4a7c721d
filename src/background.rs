use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cache::{fetch_network_first, FeedCache};
use crate::data_provider::FeedSource;
use crate::SharedDataHandle;

/// Fetch the feed once and publish the result into shared state
pub async fn refresh_scores(source: &dyn FeedSource, cache: &FeedCache, shared_data: &SharedDataHandle) {
    match fetch_network_first(source, cache).await {
        Ok(fetched) => {
            let mut shared = shared_data.write().await;
            info!(
                "REFRESH: {} games from {}{}",
                fetched.scores.games.len(),
                source.describe(),
                if fetched.stale { " (stale)" } else { "" }
            );
            shared.scores = Arc::new(Some(fetched.scores));
            shared.stale = fetched.stale;
            shared.generation += 1;
            shared.error_message = fetched.error.map(|e| format!("Showing cached scores: {}", e));
            if !fetched.stale {
                shared.last_refresh = Some(SystemTime::now());
            }
        }
        Err(e) => {
            error!("REFRESH: failed to fetch scores from {}: {}", source.describe(), e);
            let mut shared = shared_data.write().await;
            shared.error_message = Some(format!("Failed to fetch scores: {}", e));
        }
    }
}

/// Background task loop that periodically refreshes the scores feed
pub async fn fetch_data_loop(
    source: Box<dyn FeedSource>,
    shared_data: SharedDataHandle,
    interval: u64,
    mut refresh_rx: mpsc::Receiver<()>,
) {
    let cache = FeedCache::default();
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval.max(1)));
    interval_timer.tick().await; // First tick completes immediately

    loop {
        refresh_scores(source.as_ref(), &cache, &shared_data).await;

        tokio::select! {
            _ = interval_timer.tick() => {
                debug!("REFRESH: interval elapsed");
            }
            received = refresh_rx.recv() => {
                if received.is_none() {
                    debug!("REFRESH: channel closed, stopping");
                    return;
                }
                debug!("REFRESH: manual refresh requested");
            }
        }
    }
}
