//! Fetch executor backed by an external retrieval program
//!
//! The program is invoked as `<program> [args..] <resource-name>` and must
//! print the path of an image-info YAML file on stdout, the way the agent's
//! `resource-get` hook tool does. A non-zero exit or empty output means the
//! resource is not available.

use std::fs;
use std::process::Command;

use tracing::{debug, info, warn};

use super::registry::ResourceRegistry;
use super::{FetchExecutor, ImageInfo};
use crate::error::{AutofetchError, ErrorCategory, Result, fetch};

/// Default retrieval program
pub const DEFAULT_FETCH_PROGRAM: &str = "resource-get";

/// Program and leading arguments used to retrieve a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl FetchCommand {
    /// Parse a whitespace separated command line
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| fetch::invalid_command("fetch command is empty"))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Default for FetchCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_FETCH_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct CommandFetchExecutor {
    command: FetchCommand,
    registry: ResourceRegistry,
}

impl CommandFetchExecutor {
    pub fn new(command: FetchCommand, registry: ResourceRegistry) -> Self {
        Self { command, registry }
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    fn retrieve(&self, name: &str) -> Result<ImageInfo> {
        let program = &self.command.program;
        let output = Command::new(program)
            .args(&self.command.args)
            .arg(name)
            .output()
            .map_err(|e| fetch::failed(name, format!("could not run '{program}': {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let mut reason = format!("'{program}' exited with {}", output.status);
            if !stderr.is_empty() {
                reason.push_str(": ");
                reason.push_str(stderr);
            }
            return Err(fetch::failed(name, reason));
        }

        let info_path = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if info_path.is_empty() {
            return Err(fetch::failed(name, "resource is not attached"));
        }

        let content = fs::read_to_string(&info_path)
            .map_err(|e| fetch::failed(name, format!("cannot read image info {info_path}: {e}")))?;
        let info: ImageInfo = serde_yaml::from_str(&content)
            .map_err(|e| fetch::failed(name, format!("malformed image info {info_path}: {e}")))?;

        if info.registry_path.trim().is_empty() {
            return Err(fetch::failed(name, "image info has an empty registrypath"));
        }

        Ok(info)
    }
}

impl FetchExecutor for CommandFetchExecutor {
    fn fetch(&mut self, name: &str) -> Result<()> {
        debug!(resource = name, program = %self.command.program, "fetching resource");

        match self.retrieve(name) {
            Ok(info) => {
                info!(resource = name, image = %info.registry_path, "resource available");
                self.registry.record_available(name, info);
                self.registry.save()
            }
            Err(err) => {
                let reason = match &err {
                    AutofetchError::FetchFailed { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                warn!(resource = name, %reason, "resource fetch failed");
                self.registry.record_failed(name, reason);
                self.registry.save()?;
                Err(err)
            }
        }
    }

    fn fetch_all_pending(&mut self) -> Result<()> {
        let queue = self.registry.pending().to_vec();
        if queue.is_empty() {
            debug!("pending queue is empty");
            return Ok(());
        }

        let mut failed = Vec::new();
        for name in queue {
            match self.fetch(&name) {
                Ok(()) => {
                    self.registry.dequeue(&name);
                    self.registry.save()?;
                }
                Err(err) if err.category() == ErrorCategory::Fetch => failed.push(name),
                Err(err) => return Err(err),
            }
        }

        if failed.is_empty() {
            Ok(())
        } else {
            Err(fetch::pending_failed(&failed))
        }
    }

    fn enqueue(&mut self, name: &str) -> Result<()> {
        if self.registry.enqueue(name) {
            debug!(resource = name, "queued for pending fetch");
            self.registry.save()?;
        }
        Ok(())
    }

    fn forget(&mut self) -> Result<()> {
        self.registry.clear();
        self.registry.save()
    }
}
