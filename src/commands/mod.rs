//! Command implementations for autofetch CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod request;
pub mod reset;
pub mod run;
pub mod show;
pub mod status;
pub mod version;
