//! Durable reconcile flags
//!
//! The reconciler keeps two booleans across process restarts:
//!
//! - [`AUTO_FETCHED_FLAG`]: the one-time auto-fetch pass has completed. Goes
//!   false to true once per lifecycle and only returns to false on an explicit
//!   reset.
//! - [`FETCH_PENDING_FLAG`]: an external event asked for another fetch pass.
//!
//! Both live in a [`FlagStore`] injected into [`ReconcileState`].

pub mod file_store;
#[cfg(test)]
pub mod memory;

use crate::error::Result;

pub use file_store::FileFlagStore;

/// Flag key recording completion of the initial auto-fetch pass
pub const AUTO_FETCHED_FLAG: &str = "layer.docker-resource.auto-fetched";

/// Flag key armed by external events requesting a pending fetch pass
pub const FETCH_PENDING_FLAG: &str = "layer.docker-resource.pending";

/// Durable boolean key-value store scoped to one deployment unit
///
/// Unknown keys read as `false`.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<bool>;
    fn set(&mut self, key: &str, value: bool) -> Result<()>;
}

/// Typed view of the reconcile flags over a [`FlagStore`]
#[derive(Debug)]
pub struct ReconcileState<S> {
    store: S,
}

impl<S: FlagStore> ReconcileState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn auto_fetched(&self) -> Result<bool> {
        self.store.get(AUTO_FETCHED_FLAG)
    }

    pub fn mark_auto_fetched(&mut self) -> Result<()> {
        self.store.set(AUTO_FETCHED_FLAG, true)
    }

    /// Re-provisioning reset: the next dispatch runs the initial pass again
    pub fn clear_auto_fetched(&mut self) -> Result<()> {
        self.store.set(AUTO_FETCHED_FLAG, false)
    }

    pub fn fetch_pending(&self) -> Result<bool> {
        self.store.get(FETCH_PENDING_FLAG)
    }

    pub fn set_fetch_pending(&mut self, pending: bool) -> Result<()> {
        self.store.set(FETCH_PENDING_FLAG, pending)
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::memory::MemoryFlagStore;
    use super::*;

    #[test]
    fn test_flags_default_to_false() {
        let state = ReconcileState::new(MemoryFlagStore::default());
        assert!(!state.auto_fetched().unwrap());
        assert!(!state.fetch_pending().unwrap());
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = ReconcileState::new(MemoryFlagStore::default());

        state.set_fetch_pending(true).unwrap();
        assert!(state.fetch_pending().unwrap());
        assert!(!state.auto_fetched().unwrap());

        state.mark_auto_fetched().unwrap();
        state.set_fetch_pending(false).unwrap();
        assert!(state.auto_fetched().unwrap());
        assert!(!state.fetch_pending().unwrap());
    }

    #[test]
    fn test_clear_auto_fetched() {
        let mut state = ReconcileState::new(MemoryFlagStore::default());
        state.mark_auto_fetched().unwrap();
        state.clear_auto_fetched().unwrap();
        assert!(!state.auto_fetched().unwrap());
    }

    #[test]
    fn test_uses_layer_flag_keys() {
        let mut state = ReconcileState::new(MemoryFlagStore::default());
        state.mark_auto_fetched().unwrap();
        state.set_fetch_pending(true).unwrap();

        assert!(state.store().get("layer.docker-resource.auto-fetched").unwrap());
        assert!(state.store().get("layer.docker-resource.pending").unwrap());
    }
}
