use cached::{Cached, TimedSizedCache};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::data_provider::{FeedError, FeedSource};
use crate::types::Scores;

/// How long a fallback snapshot stays usable, in seconds
const SNAPSHOT_LIFESPAN_SECS: u64 = 24 * 60 * 60;

/// Last good feed snapshot, served when the network is unavailable
pub struct FeedCache {
    snapshot: Mutex<TimedSizedCache<(), Scores>>,
}

impl Default for FeedCache {
    fn default() -> Self {
        Self::with_lifespan(SNAPSHOT_LIFESPAN_SECS)
    }
}

impl FeedCache {
    pub fn with_lifespan(seconds: u64) -> Self {
        Self {
            snapshot: Mutex::new(TimedSizedCache::with_size_and_lifespan(1, seconds)),
        }
    }

    pub async fn clear(&self) {
        self.snapshot.lock().await.cache_clear();
    }

    pub async fn len(&self) -> usize {
        self.snapshot.lock().await.cache_size()
    }
}

/// Result of a network-first fetch
#[derive(Debug, Clone)]
pub struct Fetched {
    pub scores: Scores,
    /// Served from the cache because the fetch failed
    pub stale: bool,
    /// Fetch error behind a stale snapshot
    pub error: Option<String>,
}

/// Try the source first; on failure fall back to the last good snapshot
pub async fn fetch_network_first(source: &dyn FeedSource, cache: &FeedCache) -> Result<Fetched, FeedError> {
    match source.fetch_scores().await {
        Ok(scores) => {
            debug!("CACHE: storing snapshot with {} games", scores.games.len());
            cache.snapshot.lock().await.cache_set((), scores.clone());
            Ok(Fetched {
                scores,
                stale: false,
                error: None,
            })
        }
        Err(e) => {
            let mut snapshot = cache.snapshot.lock().await;
            match snapshot.cache_get(&()) {
                Some(scores) => {
                    warn!("CACHE: fetch from {} failed, serving cached snapshot: {}", source.describe(), e);
                    Ok(Fetched {
                        scores: scores.clone(),
                        stale: true,
                        error: Some(e.to_string()),
                    })
                }
                None => Err(e),
            }
        }
    }
}
