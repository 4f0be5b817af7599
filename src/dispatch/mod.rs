//! Event dispatcher driving a [`ReconcileGate`]
//!
//! Every lifecycle event ends in one [`Dispatcher::dispatch`]: run the initial
//! auto-fetch pass until it has succeeded once, then serve a pending fetch
//! request if one is armed. The dispatcher owns the pending flag's lifecycle:
//! it arms it in [`Dispatcher::request_fetch`] and clears it only after the
//! pending pass succeeded.

use tracing::{debug, info};

use crate::error::Result;
use crate::fetch::FetchExecutor;
use crate::manifest::ManifestProvider;
use crate::reconcile::{AutoFetchOutcome, PendingOutcome, ReconcileGate};
use crate::state::FlagStore;

/// What one dispatch did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub auto_fetch: AutoFetchOutcome,
    pub pending: PendingOutcome,
}

pub struct Dispatcher<M, F, S> {
    gate: ReconcileGate<M, F, S>,
}

impl<M, F, S> Dispatcher<M, F, S>
where
    M: ManifestProvider,
    F: FetchExecutor,
    S: FlagStore,
{
    pub fn new(gate: ReconcileGate<M, F, S>) -> Self {
        Self { gate }
    }

    /// Invoke whichever gate operations the current flags call for
    ///
    /// A failed initial pass is returned before the pending pass is looked at.
    /// A failed pending pass leaves the pending flag armed.
    pub fn dispatch(&mut self) -> Result<DispatchReport> {
        let auto_fetch = self.gate.run_initial_auto_fetch()?;

        let pending = self.gate.run_pending_fetch()?;
        if pending == PendingOutcome::Fetched {
            self.gate.state_mut().set_fetch_pending(false)?;
            debug!("pending fetch flag cleared");
        }

        Ok(DispatchReport {
            auto_fetch,
            pending,
        })
    }

    /// Queue declared docker resources and arm the pending flag
    ///
    /// Every name is validated before anything is queued.
    pub fn request_fetch<N: AsRef<str>>(&mut self, names: &[N]) -> Result<()> {
        let manifest = self.gate.manifest().declared_resources()?;
        for name in names {
            manifest.require_docker(name.as_ref())?;
        }

        for name in names {
            self.gate.executor_mut().enqueue(name.as_ref())?;
        }
        self.gate.state_mut().set_fetch_pending(true)?;
        info!(count = names.len(), "fetch requested");
        Ok(())
    }

    /// Explicit re-provisioning reset of the completion flag
    ///
    /// With `clear_pending`, the pending request, its queue and every
    /// recorded outcome are dropped too.
    pub fn reset(&mut self, clear_pending: bool) -> Result<()> {
        self.gate.state_mut().clear_auto_fetched()?;
        if clear_pending {
            self.gate.executor_mut().forget()?;
            self.gate.state_mut().set_fetch_pending(false)?;
        }
        info!(clear_pending, "reconcile state reset");
        Ok(())
    }

    pub fn gate(&self) -> &ReconcileGate<M, F, S> {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut ReconcileGate<M, F, S> {
        &mut self.gate
    }
}
