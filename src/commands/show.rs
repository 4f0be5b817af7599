//! Show command: one declared resource and its fetch outcome

use console::Style;

use super::helpers::open_dispatcher;
use crate::cli::ShowArgs;
use crate::common::display_utils::{flag_label, label, print_image, status_label};
use crate::config::Settings;
use crate::error::{Result, manifest as manifest_error};
use crate::manifest::ManifestProvider;

/// Run show command
pub fn run(settings: &Settings, args: &ShowArgs) -> Result<()> {
    let dispatcher = open_dispatcher(settings)?;
    let gate = dispatcher.gate();
    let manifest = gate.manifest().declared_resources()?;
    let entry = manifest
        .get(&args.name)
        .ok_or_else(|| manifest_error::not_declared(&args.name))?;

    println!("{}", Style::new().bold().yellow().apply_to(&entry.name));
    println!("  {} {}", label("Type:"), entry.kind);
    println!("  {} {}", label("Auto-fetch:"), flag_label(entry.auto_fetch));
    if let Some(description) = &entry.description {
        println!("  {} {description}", label("Description:"));
    }

    let registry = gate.executor().registry();
    let queued = registry.pending().iter().any(|name| name == &entry.name);
    println!("  {} {}", label("Queued:"), flag_label(queued));

    match registry.status(&entry.name) {
        Some(status) => {
            println!("  {} {}", label("Status:"), status_label(status.status));
            if let Some(image) = &status.image {
                print_image(image, "  ");
            }
            if let Some(error) = &status.error {
                println!("  {} {error}", label("Error:"));
            }
        }
        None => println!("  {} not fetched", label("Status:")),
    }

    Ok(())
}
