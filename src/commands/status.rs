//! Status command: reconcile flags, queue and recorded outcomes

use super::helpers::{open_dispatcher, plural};
use crate::common::display_utils::{flag_label, label, print_image, status_label};
use crate::config::Settings;
use crate::error::Result;

/// Run status command
pub fn run(settings: &Settings) -> Result<()> {
    let dispatcher = open_dispatcher(settings)?;
    let gate = dispatcher.gate();
    let registry = gate.executor().registry();

    println!("Reconcile state:");
    println!("  {} {}", label("Location:"), settings.state_dir.display());
    println!(
        "  {} {}",
        label("Auto-fetched:"),
        flag_label(gate.state().auto_fetched()?)
    );
    println!(
        "  {} {}",
        label("Fetch pending:"),
        flag_label(gate.state().fetch_pending()?)
    );

    let pending = registry.pending();
    if pending.is_empty() {
        println!("  {} (empty)", label("Queue:"));
    } else {
        println!("  {} {}", label("Queue:"), pending.join(", "));
    }

    let resources: Vec<_> = registry.resources().collect();
    println!();
    if resources.is_empty() {
        println!("No resources fetched yet.");
        return Ok(());
    }

    println!("Resources ({}):", resources.len());
    for (name, status) in resources {
        println!("  {name} [{}]", status_label(status.status));
        if let Some(image) = &status.image {
            print_image(image, "    ");
        }
        if let Some(error) = &status.error {
            println!("    {} {error}", label("Error:"));
        }
    }

    let queued = pending.len();
    if queued > 0 {
        println!();
        println!(
            "{queued} resource{} queued. Run 'autofetch run' to fetch.",
            plural(queued)
        );
    }

    Ok(())
}
