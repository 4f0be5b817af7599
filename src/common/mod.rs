//! Common utilities shared across modules

pub mod display_utils;
pub mod fs;
