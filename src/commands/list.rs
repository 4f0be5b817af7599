//! List command: declared resources

use console::Style;

use crate::cli::ListArgs;
use crate::common::display_utils::entry_attributes;
use crate::config::Settings;
use crate::error::Result;
use crate::manifest::{FileManifestProvider, ManifestProvider, select_auto_fetch_resources};

/// Run list command
pub fn run(settings: &Settings, args: &ListArgs) -> Result<()> {
    let manifest = FileManifestProvider::new(&settings.manifest_path).declared_resources()?;

    if manifest.is_empty() {
        println!("No resources declared.");
        return Ok(());
    }

    let entries = if args.all {
        manifest.entries().to_vec()
    } else {
        select_auto_fetch_resources(&manifest)
    };

    if entries.is_empty() {
        println!("No auto-fetch resources declared.");
        return Ok(());
    }

    let heading = if args.all {
        "Declared resources"
    } else {
        "Auto-fetch resources"
    };
    println!("{heading} ({}):", entries.len());

    for entry in &entries {
        println!(
            "  {} ({})",
            Style::new().bold().yellow().apply_to(&entry.name),
            entry_attributes(entry)
        );
        if let Some(description) = &entry.description {
            println!("    {description}");
        }
    }

    Ok(())
}
