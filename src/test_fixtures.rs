//! Test fixtures for the reconciler
//!
//! In-process collaborators that record how they were called:
//!
//! ```ignore
//! use crate::test_fixtures::{RecordingExecutor, StaticManifest, manifest_abc};
//!
//! let manifest = StaticManifest::new(manifest_abc());
//! let executor = RecordingExecutor::default().failing_on("a");
//! ```

use std::cell::Cell;
use std::collections::HashSet;

use crate::error::{Result, fetch};
use crate::fetch::FetchExecutor;
use crate::manifest::{Manifest, ManifestProvider, ResourceEntry, ResourceKind};

/// Manifest provider serving a fixed snapshot and counting loads
#[derive(Debug, Default)]
pub struct StaticManifest {
    manifest: Manifest,
    loads: Cell<usize>,
}

impl StaticManifest {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            loads: Cell::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.get()
    }
}

impl ManifestProvider for StaticManifest {
    fn declared_resources(&self) -> Result<Manifest> {
        self.loads.set(self.loads.get() + 1);
        Ok(self.manifest.clone())
    }
}

/// Fetch executor that records every call and fails on chosen names
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    pub fetched: Vec<String>,
    pub pending_passes: usize,
    pub queued: Vec<String>,
    failing: HashSet<String>,
    fail_pending: bool,
}

impl RecordingExecutor {
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    pub fn failing_pending(mut self) -> Self {
        self.fail_pending = true;
        self
    }

    /// Stop failing on `name`, as a later event would see a fixed registry
    pub fn recover(&mut self, name: &str) {
        self.failing.remove(name);
    }

    pub fn recover_pending(&mut self) {
        self.fail_pending = false;
    }
}

impl FetchExecutor for RecordingExecutor {
    fn fetch(&mut self, name: &str) -> Result<()> {
        self.fetched.push(name.to_string());
        if self.failing.contains(name) {
            return Err(fetch::failed(name, "registry unreachable"));
        }
        Ok(())
    }

    fn fetch_all_pending(&mut self) -> Result<()> {
        self.pending_passes += 1;
        if self.fail_pending {
            return Err(fetch::pending_failed(&self.queued));
        }
        self.queued.clear();
        Ok(())
    }

    fn enqueue(&mut self, name: &str) -> Result<()> {
        if !self.queued.iter().any(|q| q == name) {
            self.queued.push(name.to_string());
        }
        Ok(())
    }

    fn forget(&mut self) -> Result<()> {
        self.queued.clear();
        Ok(())
    }
}

/// `{a: docker/auto-fetch, b: docker, c: other/auto-fetch}`
pub fn manifest_abc() -> Manifest {
    Manifest::from_entries(vec![
        ResourceEntry::docker("a", true),
        ResourceEntry::docker("b", false),
        ResourceEntry {
            name: "c".to_string(),
            kind: ResourceKind::Other("other".to_string()),
            auto_fetch: true,
            description: None,
        },
    ])
    .unwrap_or_default()
}

/// Docker auto-fetch entries named in order
pub fn docker_manifest(names: &[&str]) -> Manifest {
    Manifest::from_entries(
        names
            .iter()
            .map(|name| ResourceEntry::docker(*name, true))
            .collect(),
    )
    .unwrap_or_default()
}
