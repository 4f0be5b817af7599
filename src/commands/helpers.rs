//! Command helper utilities

use crate::config::Settings;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::fetch::{CommandFetchExecutor, ResourceRegistry};
use crate::manifest::FileManifestProvider;
use crate::reconcile::ReconcileGate;
use crate::state::FileFlagStore;

/// Dispatcher wired to the file-backed collaborators
pub type CliDispatcher = Dispatcher<FileManifestProvider, CommandFetchExecutor, FileFlagStore>;

/// Open the unit's state and build a dispatcher over it
///
/// The manifest is not read until an operation needs it.
pub fn open_dispatcher(settings: &Settings) -> Result<CliDispatcher> {
    let provider = FileManifestProvider::new(&settings.manifest_path);
    let registry = ResourceRegistry::open(&settings.state_dir)?;
    let executor = CommandFetchExecutor::new(settings.fetch_command.clone(), registry);
    let store = FileFlagStore::open(&settings.state_dir)?;
    Ok(Dispatcher::new(ReconcileGate::new(provider, executor, store)))
}

/// `s` for counts other than one
pub fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
