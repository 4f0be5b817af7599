//! Display helpers shared by the CLI commands
//!
//! Keeps labels and colors consistent between `status`, `list` and `show`.

use console::{Style, StyledObject};

use crate::fetch::{FetchStatus, ImageInfo};
use crate::manifest::ResourceEntry;

/// Bold section label, e.g. `Pending:`
pub fn label(text: &str) -> StyledObject<&str> {
    Style::new().bold().apply_to(text)
}

/// `yes` in green or `no` in dim
pub fn flag_label(value: bool) -> StyledObject<&'static str> {
    if value {
        Style::new().green().apply_to("yes")
    } else {
        Style::new().dim().apply_to("no")
    }
}

pub fn status_label(status: FetchStatus) -> StyledObject<&'static str> {
    match status {
        FetchStatus::Available => Style::new().green().apply_to("available"),
        FetchStatus::Failed => Style::new().red().apply_to("failed"),
    }
}

/// Attribute summary of a declared resource, e.g. `docker, auto-fetch`
pub fn entry_attributes(entry: &ResourceEntry) -> String {
    if entry.auto_fetch {
        format!("{}, auto-fetch", entry.kind)
    } else {
        entry.kind.to_string()
    }
}

/// Replace a secret with asterisks of fixed length
pub fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "********" }
}

/// Print image coordinates with the password masked
pub fn print_image(image: &ImageInfo, indent: &str) {
    println!("{indent}{} {}", label("Image:"), image.registry_path);
    if let Some(username) = &image.username {
        println!("{indent}{} {username}", label("Username:"));
    }
    if let Some(password) = &image.password {
        println!("{indent}{} {}", label("Password:"), mask_secret(password));
    }
}
