//! Common test utilities for autofetch integration tests

use std::path::PathBuf;
use tempfile::TempDir;

use assert_cmd::Command;

/// A test unit for integration tests: manifest, state directory and a stub
/// retrieval program serving image-info files from `images/`
#[allow(dead_code)]
pub struct TestUnit {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to unit root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestUnit {
    /// Create a new test unit
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("images")).expect("Failed to create images directory");
        let unit = Self { temp, path };
        #[cfg(unix)]
        unit.write_stub_fetch_program();
        unit
    }

    /// Write a file in the unit
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the unit
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the unit
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `metadata.yaml`
    pub fn write_manifest(&self, content: &str) {
        self.write_file("metadata.yaml", content);
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path.join("metadata.yaml")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.path.join("state")
    }

    /// Make resource `name` retrievable by the stub program
    pub fn attach_image(&self, name: &str, registry_path: &str) {
        self.write_file(
            &format!("images/{name}.yaml"),
            &format!("registrypath: {registry_path}\nusername: deploy\npassword: hunter2\n"),
        );
    }

    /// Make resource `name` unretrievable again
    pub fn detach_image(&self, name: &str) {
        let _ = std::fs::remove_file(self.path.join(format!("images/{name}.yaml")));
    }

    /// Resource names the stub program was invoked with, in call order
    pub fn fetch_calls(&self) -> Vec<String> {
        if !self.file_exists("calls.log") {
            return Vec::new();
        }
        self.read_file("calls.log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn stub_fetch_program(&self) -> PathBuf {
        self.path.join("resource-get")
    }

    /// Write the stub retrieval program
    #[cfg(unix)]
    fn write_stub_fetch_program(&self) {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path.join("resource-get");
        let images = self.path.join("images");
        let calls = self.path.join("calls.log");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$1\" >> \"{}\"\nf=\"{}/$1.yaml\"\n[ -f \"$f\" ] || {{ echo \"resource $1 not attached\" >&2; exit 1; }}\necho \"$f\"\n",
                calls.display(),
                images.display()
            ),
        )
        .expect("Failed to write stub program");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub program executable");
    }

    /// autofetch command bound to this unit's manifest and state
    pub fn cmd(&self) -> Command {
        let mut cmd = autofetch_cmd();
        cmd.current_dir(&self.path)
            .env("AUTOFETCH_MANIFEST", self.manifest_path())
            .env("AUTOFETCH_STATE_DIR", self.state_dir());
        cmd.env("AUTOFETCH_FETCH_COMMAND", self.stub_fetch_program());
        cmd
    }
}

impl Default for TestUnit {
    fn default() -> Self {
        Self::new()
    }
}

/// The real autofetch binary with developer overrides removed
#[allow(deprecated)]
pub fn autofetch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("autofetch").expect("autofetch binary");
    cmd.env_remove("AUTOFETCH_MANIFEST")
        .env_remove("AUTOFETCH_STATE_DIR")
        .env_remove("AUTOFETCH_FETCH_COMMAND")
        .env_remove("AUTOFETCH_LOG");
    cmd
}

/// `{a: docker/auto-fetch, b: docker, c: other/auto-fetch}`
#[allow(dead_code)]
pub const MANIFEST_ABC: &str = r#"
name: web
summary: test unit
resources:
  a:
    type: docker
    auto-fetch: true
    description: "application image"
  b:
    type: docker
    auto-fetch: false
  c:
    type: other
    auto-fetch: true
"#;
