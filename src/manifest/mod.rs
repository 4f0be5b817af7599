//! Declared resource manifest
//!
//! The manifest is the unit's `metadata.yaml`. Its `resources` mapping is
//! turned into typed [`ResourceEntry`] records once, at load time, so the
//! rest of the crate never deals with missing attributes.

pub mod scanner;
pub mod serialization;

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, manifest as manifest_error};
use serialization::{MetadataDocument, RawResource};

pub use scanner::select_auto_fetch_resources;

/// Classification tag of a declared resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Docker,
    File,
    Other(String),
    /// No `type` attribute was given
    Unspecified,
}

impl ResourceKind {
    fn from_tag(tag: Option<String>) -> Self {
        match tag.as_deref() {
            None => Self::Unspecified,
            Some("docker") => Self::Docker,
            Some("file") => Self::File,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Docker => "docker",
            Self::File => "file",
            Self::Other(tag) => tag,
            Self::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Key in the manifest's resources mapping
    pub name: String,

    pub kind: ResourceKind,

    /// Marked for unattended retrieval (`auto-fetch`, defaults to false)
    pub auto_fetch: bool,

    pub description: Option<String>,
}

impl ResourceEntry {
    /// Create a docker resource entry
    #[cfg(test)]
    pub fn docker(name: impl Into<String>, auto_fetch: bool) -> Self {
        Self {
            name: name.into(),
            kind: ResourceKind::Docker,
            auto_fetch,
            description: None,
        }
    }

    fn from_raw(name: String, raw: Option<RawResource>) -> Self {
        let raw = raw.unwrap_or_default();
        Self {
            name,
            kind: ResourceKind::from_tag(raw.kind),
            auto_fetch: raw.auto_fetch.unwrap_or(false),
            description: raw.description,
        }
    }

    pub fn is_docker(&self) -> bool {
        self.kind == ResourceKind::Docker
    }
}

/// A snapshot of the declared resources, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ResourceEntry>,
}

impl Manifest {
    /// Build a manifest from entries, rejecting duplicate names
    pub fn from_entries(entries: Vec<ResourceEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(manifest_error::invalid(format!(
                    "resource '{}' is declared more than once",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse the `resources` section of a metadata document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: MetadataDocument = serde_yaml::from_str(yaml)?;
        let entries = document
            .resources
            .map(|resources| resources.0)
            .unwrap_or_default()
            .into_iter()
            .map(|(name, raw)| ResourceEntry::from_raw(name, raw))
            .collect();
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Look up a declared resource by name
    pub fn get(&self, name: &str) -> Option<&ResourceEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name that external events may request a fetch for
    pub fn require_docker(&self, name: &str) -> Result<&ResourceEntry> {
        let entry = self
            .get(name)
            .ok_or_else(|| manifest_error::not_declared(name))?;
        if !entry.is_docker() {
            return Err(manifest_error::not_docker(name, entry.kind.as_str()));
        }
        Ok(entry)
    }
}

/// Supplies the declared resources of the deployment unit
pub trait ManifestProvider {
    fn declared_resources(&self) -> Result<Manifest>;
}

/// Reads the manifest from a metadata file on every call
#[derive(Debug, Clone)]
pub struct FileManifestProvider {
    path: PathBuf,
}

impl FileManifestProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ManifestProvider for FileManifestProvider {
    fn declared_resources(&self) -> Result<Manifest> {
        let display = self.path.display().to_string();
        if !self.path.is_file() {
            return Err(manifest_error::not_found(display));
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| manifest_error::read_failed(&display, e.to_string()))?;

        Manifest::from_yaml(&content).map_err(|err| match err {
            crate::error::AutofetchError::ManifestParseFailed { reason, .. } => {
                manifest_error::parse_failed(display, reason)
            }
            other => other,
        })
    }
}
