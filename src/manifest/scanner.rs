//! Selection of the resources the initial pass retrieves

use super::{Manifest, ResourceEntry};

/// Docker resources marked `auto-fetch`, in manifest order
pub fn select_auto_fetch_resources(manifest: &Manifest) -> Vec<ResourceEntry> {
    manifest
        .entries()
        .iter()
        .filter(|entry| entry.is_docker() && entry.auto_fetch)
        .cloned()
        .collect()
}
