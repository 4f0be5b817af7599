//! Runtime settings for autofetch
//!
//! Each setting is resolved from, in order: command line flag, environment
//! variable, built-in default.
//!
//! - manifest: `--manifest`, `AUTOFETCH_MANIFEST`, `./metadata.yaml`
//! - state directory: `--state-dir`, `AUTOFETCH_STATE_DIR`, the platform's
//!   local data directory with an `autofetch` subdirectory
//! - fetch program: `AUTOFETCH_FETCH_COMMAND`, `resource-get`

use std::path::PathBuf;

use crate::error::{Result, config};
use crate::fetch::FetchCommand;

/// Default manifest file name, relative to the working directory
pub const MANIFEST_FILE: &str = "metadata.yaml";

/// Default state directory name under the user's local data directory
const STATE_DIR: &str = "autofetch";

/// Environment variable overriding the fetch program
pub const FETCH_COMMAND_ENV: &str = "AUTOFETCH_FETCH_COMMAND";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub manifest_path: PathBuf,
    pub state_dir: PathBuf,
    pub fetch_command: FetchCommand,
}

impl Settings {
    /// Resolve settings from CLI values (which already include their env fallbacks)
    pub fn resolve(manifest: Option<PathBuf>, state_dir: Option<PathBuf>) -> Result<Self> {
        let manifest_path = manifest.unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));
        let state_dir = match state_dir {
            Some(dir) => dir,
            None => default_state_dir()?,
        };

        Ok(Self {
            manifest_path,
            state_dir,
            fetch_command: fetch_command()?,
        })
    }
}

/// Get the default state directory path
pub fn default_state_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| config::invalid("Could not determine local data directory"))?;
    Ok(base.join(STATE_DIR))
}

/// Fetch program from the environment, or the default
pub fn fetch_command() -> Result<FetchCommand> {
    match std::env::var(FETCH_COMMAND_ENV) {
        Ok(command) => FetchCommand::parse(&command),
        Err(_) => Ok(FetchCommand::default()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    fn with_fetch_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let original = std::env::var(FETCH_COMMAND_ENV).ok();
        unsafe {
            match value {
                Some(v) => std::env::set_var(FETCH_COMMAND_ENV, v),
                None => std::env::remove_var(FETCH_COMMAND_ENV),
            }
        }

        let result = f();

        unsafe {
            if let Some(o) = original {
                std::env::set_var(FETCH_COMMAND_ENV, o);
            } else {
                std::env::remove_var(FETCH_COMMAND_ENV);
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let settings = with_fetch_env(None, || Settings::resolve(None, None)).unwrap();
        assert_eq!(settings.manifest_path, PathBuf::from("metadata.yaml"));
        assert!(settings.state_dir.ends_with("autofetch"));
        assert_eq!(settings.fetch_command, FetchCommand::default());
    }

    #[test]
    #[serial]
    fn test_explicit_values_win() {
        let settings = with_fetch_env(None, || {
            Settings::resolve(
                Some(PathBuf::from("/srv/unit/metadata.yaml")),
                Some(PathBuf::from("/var/lib/autofetch/unit-0")),
            )
        })
        .unwrap();
        assert_eq!(
            settings.manifest_path,
            PathBuf::from("/srv/unit/metadata.yaml")
        );
        assert_eq!(settings.state_dir, PathBuf::from("/var/lib/autofetch/unit-0"));
    }

    #[test]
    #[serial]
    fn test_fetch_command_from_env() {
        let command = with_fetch_env(Some("/opt/hooks/resource-get --quiet"), fetch_command).unwrap();
        assert_eq!(command.program, "/opt/hooks/resource-get");
        assert_eq!(command.args, vec!["--quiet"]);
    }

    #[test]
    #[serial]
    fn test_empty_fetch_command_is_rejected() {
        let result = with_fetch_env(Some(""), fetch_command);
        assert!(result.is_err());
    }
}
