//! Persistent record of fetch outcomes and the pending queue
//!
//! Stored as `<state-dir>/resources.json`:
//!
//! ```json
//! {
//!   "pending": ["web"],
//!   "resources": {
//!     "worker": { "status": "available", "image": { "registrypath": "..." } }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ImageInfo;
use crate::common::fs::{read_optional, write_atomic};
use crate::error::{Result, state};

/// File name of the registry inside the state directory
pub const REGISTRY_FILE: &str = "resources.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Available,
    Failed,
}

/// Last known outcome for one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub status: FetchStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RegistryData {
    #[serde(default)]
    pending: Vec<String>,

    #[serde(default)]
    resources: BTreeMap<String, ResourceStatus>,
}

#[derive(Debug)]
pub struct ResourceRegistry {
    path: PathBuf,
    data: RegistryData,
}

impl ResourceRegistry {
    /// Open the registry in `state_dir`, loading existing content
    pub fn open(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(REGISTRY_FILE);
        let data = match read_optional(&path)? {
            Some(content) if !content.trim().is_empty() => serde_json::from_str(&content)
                .map_err(|e| state::read_failed(path.display().to_string(), e.to_string()))?,
            _ => RegistryData::default(),
        };
        Ok(Self { path, data })
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| state::write_failed(self.path.display().to_string(), e.to_string()))?;
        write_atomic(&self.path, json.as_bytes())
    }

    /// Names waiting for the next pending pass, oldest first
    pub fn pending(&self) -> &[String] {
        &self.data.pending
    }

    /// Queue `name`; returns false when it was already queued
    pub fn enqueue(&mut self, name: &str) -> bool {
        if self.data.pending.iter().any(|queued| queued == name) {
            return false;
        }
        self.data.pending.push(name.to_string());
        true
    }

    pub fn dequeue(&mut self, name: &str) {
        self.data.pending.retain(|queued| queued != name);
    }

    pub fn status(&self, name: &str) -> Option<&ResourceStatus> {
        self.data.resources.get(name)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&String, &ResourceStatus)> {
        self.data.resources.iter()
    }

    pub fn record_available(&mut self, name: &str, image: ImageInfo) {
        self.data.resources.insert(
            name.to_string(),
            ResourceStatus {
                status: FetchStatus::Available,
                image: Some(image),
                error: None,
            },
        );
    }

    pub fn record_failed(&mut self, name: &str, reason: impl Into<String>) {
        self.data.resources.insert(
            name.to_string(),
            ResourceStatus {
                status: FetchStatus::Failed,
                image: None,
                error: Some(reason.into()),
            },
        );
    }

    /// Forget every outcome and empty the queue
    pub fn clear(&mut self) {
        self.data = RegistryData::default();
    }
}
