//! Flag-gated reconciliation of declared resources
//!
//! [`ReconcileGate`] owns the two reconcile flags and exposes the two
//! operations an event dispatcher invokes:
//!
//! - [`ReconcileGate::run_initial_auto_fetch`]: fetch every docker resource
//!   marked `auto-fetch`, once per lifecycle.
//! - [`ReconcileGate::run_pending_fetch`]: hand a pending fetch request to the
//!   executor.
//!
//! Operations run to completion and are never invoked concurrently on the
//! same gate. Neither retries internally; the dispatcher re-invokes them on a
//! later event.


use tracing::{debug, info};

use crate::error::Result;
use crate::fetch::FetchExecutor;
use crate::manifest::{ManifestProvider, select_auto_fetch_resources};
use crate::state::{FlagStore, ReconcileState};

/// Result of [`ReconcileGate::run_initial_auto_fetch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoFetchOutcome {
    /// The pass already completed in this lifecycle; nothing was done
    AlreadyDone,
    /// The pass ran and every selected resource was fetched
    Completed { fetched: Vec<String> },
}

/// Result of [`ReconcileGate::run_pending_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOutcome {
    /// No fetch was pending; the executor was not called
    NotPending,
    /// The executor processed the pending request
    Fetched,
}

pub struct ReconcileGate<M, F, S> {
    manifest: M,
    executor: F,
    state: ReconcileState<S>,
}

impl<M, F, S> ReconcileGate<M, F, S>
where
    M: ManifestProvider,
    F: FetchExecutor,
    S: FlagStore,
{
    pub fn new(manifest: M, executor: F, store: S) -> Self {
        Self {
            manifest,
            executor,
            state: ReconcileState::new(store),
        }
    }

    /// Fetch every auto-fetch docker resource, once per lifecycle
    ///
    /// Resources are fetched sequentially in manifest order. The first failure
    /// aborts the pass and leaves the completion flag unset, so the next call
    /// retries every resource. On success the flag is persisted before
    /// returning.
    pub fn run_initial_auto_fetch(&mut self) -> Result<AutoFetchOutcome> {
        if self.state.auto_fetched()? {
            debug!("auto-fetch already completed, skipping");
            return Ok(AutoFetchOutcome::AlreadyDone);
        }

        let manifest = self.manifest.declared_resources()?;
        let selected = select_auto_fetch_resources(&manifest);
        info!(
            declared = manifest.len(),
            selected = selected.len(),
            "starting auto-fetch pass"
        );

        let mut fetched = Vec::with_capacity(selected.len());
        for entry in selected {
            if let Err(err) = self.executor.fetch(&entry.name) {
                debug!(resource = %entry.name, "auto-fetch pass aborted");
                return Err(err);
            }
            fetched.push(entry.name);
        }

        self.state.mark_auto_fetched()?;
        info!(count = fetched.len(), "auto-fetch pass completed");
        Ok(AutoFetchOutcome::Completed { fetched })
    }

    /// Run the executor's pending fetch if one was requested
    ///
    /// Reads only the pending flag. Clearing it after a successful pass is
    /// the dispatcher's job.
    pub fn run_pending_fetch(&mut self) -> Result<PendingOutcome> {
        if !self.state.fetch_pending()? {
            return Ok(PendingOutcome::NotPending);
        }

        info!("running pending fetch");
        self.executor.fetch_all_pending()?;
        Ok(PendingOutcome::Fetched)
    }

    pub fn manifest(&self) -> &M {
        &self.manifest
    }

    pub fn executor(&self) -> &F {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut F {
        &mut self.executor
    }

    pub fn state(&self) -> &ReconcileState<S> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ReconcileState<S> {
        &mut self.state
    }
}
