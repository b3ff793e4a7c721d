pub mod background;
pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod display_mode;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod playback;
pub mod stats;
pub mod toggles;
pub mod tui;
pub mod types;

#[cfg(feature = "development")]
pub mod dev;

use std::sync::Arc;
use std::time::SystemTime;

use tokio::sync::RwLock;

use crate::types::Scores;

/// Snapshot published by the background refresh task
#[derive(Debug, Clone, Default)]
pub struct SharedData {
    pub scores: Arc<Option<Scores>>,
    /// Bumped every time a new snapshot is published
    pub generation: u64,
    /// Snapshot was served from the cache after a failed fetch
    pub stale: bool,
    pub last_refresh: Option<SystemTime>,
    pub error_message: Option<String>,
}

pub type SharedDataHandle = Arc<RwLock<SharedData>>;
