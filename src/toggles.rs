//! Persisted expand/collapse flags for game cards
//!
//! Flags are stored as strings keyed by `"<toggle>:<card index>"`. The value
//! `"false"` marks a flag as off; anything else, or no entry at all, means on.
//! The file is read once at startup and rewritten on every change.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};

const OFF: &str = "false";
const ON: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Team and game statistics panels
    Stats,
    /// Full goal list under the latest goal
    Goals,
}

impl Toggle {
    fn key(&self, index: usize) -> String {
        let name = match self {
            Toggle::Stats => "stats",
            Toggle::Goals => "goals",
        };
        format!("{}:{}", name, index)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl ToggleStore {
    /// Store that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Read persisted flags; an unreadable file starts from defaults
    pub fn load(path: Option<PathBuf>) -> Self {
        let values = path
            .as_ref()
            .filter(|p| p.exists())
            .and_then(|p| match fs::read_to_string(p) {
                Ok(content) => Some(content),
                Err(e) => {
                    warn!("Failed to read toggles from {}: {}", p.display(), e);
                    None
                }
            })
            .and_then(|content| match toml::from_str(&content) {
                Ok(values) => Some(values),
                Err(e) => {
                    warn!("Ignoring malformed toggle file: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        ToggleStore { path, values }
    }

    pub fn is_on(&self, toggle: Toggle, index: usize) -> bool {
        self.values
            .get(&toggle.key(index))
            .map_or(true, |value| value != OFF)
    }

    pub fn set(&mut self, toggle: Toggle, index: usize, on: bool) -> Result<()> {
        let value = if on { ON } else { OFF };
        self.values.insert(toggle.key(index), value.to_string());
        debug!("TOGGLE: {} = {}", toggle.key(index), value);
        self.save()
    }

    /// Flip a flag and return its new value
    pub fn flip(&mut self, toggle: Toggle, index: usize) -> Result<bool> {
        let on = !self.is_on(toggle, index);
        self.set(toggle, index, on)?;
        Ok(on)
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string(&self.values).context("Failed to encode toggles")?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}
