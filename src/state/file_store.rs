//! JSON file backed flag store
//!
//! Flags are kept in `<state-dir>/flags.json` as a flat object of key to
//! boolean. Every `set` rewrites the file atomically.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::FlagStore;
use crate::common::fs::{read_optional, write_atomic};
use crate::error::{Result, state};

/// File name of the flag store inside the state directory
pub const FLAGS_FILE: &str = "flags.json";

#[derive(Debug)]
pub struct FileFlagStore {
    path: PathBuf,
    flags: BTreeMap<String, bool>,
}

impl FileFlagStore {
    /// Open the flag store in `state_dir`, loading existing flags
    pub fn open(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(FLAGS_FILE);
        let flags: BTreeMap<String, bool> = match read_optional(&path)? {
            Some(content) if !content.trim().is_empty() => serde_json::from_str(&content)
                .map_err(|e| state::read_failed(path.display().to_string(), e.to_string()))?,
            _ => BTreeMap::new(),
        };
        debug!(path = %path.display(), count = flags.len(), "loaded flag store");
        Ok(Self { path, flags })
    }

    fn persist(&self, flags: &BTreeMap<String, bool>) -> Result<()> {
        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| state::write_failed(self.path.display().to_string(), e.to_string()))?;
        write_atomic(&self.path, json.as_bytes())
    }
}

impl FlagStore for FileFlagStore {
    fn get(&self, key: &str) -> Result<bool> {
        Ok(self.flags.get(key).copied().unwrap_or(false))
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        if self.flags.get(key).copied().unwrap_or(false) == value && self.path.exists() {
            return Ok(());
        }

        // Only commit in memory once the new state is on disk
        let mut updated = self.flags.clone();
        updated.insert(key.to_string(), value);
        self.persist(&updated)?;
        self.flags = updated;
        debug!(key, value, "flag updated");
        Ok(())
    }
}
