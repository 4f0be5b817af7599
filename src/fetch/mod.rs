//! Resource retrieval
//!
//! [`FetchExecutor`] is the seam between the reconciler and whatever actually
//! retrieves a resource. [`CommandFetchExecutor`] is the implementation the
//! CLI uses: it runs the agent's resource retrieval program and records the
//! outcome in a [`ResourceRegistry`].

pub mod command;
pub mod registry;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use command::{CommandFetchExecutor, FetchCommand};
pub use registry::{FetchStatus, ResourceRegistry};

/// Performs the actual retrieval of declared resources
pub trait FetchExecutor {
    /// Retrieve a single resource by manifest name
    fn fetch(&mut self, name: &str) -> Result<()>;

    /// Retrieve everything external events have queued
    fn fetch_all_pending(&mut self) -> Result<()>;

    /// Queue a resource for the next pending pass
    fn enqueue(&mut self, name: &str) -> Result<()>;

    /// Drop queued requests and recorded outcomes
    fn forget(&mut self) -> Result<()>;
}

/// Registry coordinates of a retrieved container image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    #[serde(rename = "registrypath")]
    pub registry_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
