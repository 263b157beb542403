//! Shared testing harness for `vhostgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings pinning the platform so tests never probe the host.
const PINNED_SETTINGS: &str = r#"[platform]
os_family = "debian"
apache_version = "2.4"
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    settings_path: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with a pinned Debian / Apache 2.4 platform.
    pub(crate) fn new() -> Self {
        Self::with_settings(PINNED_SETTINGS)
    }

    /// Create an isolated environment using the given settings file content.
    pub(crate) fn with_settings(content: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let settings_path = root.path().join("vhostgen.toml");
        fs::write(&settings_path, content).expect("Failed to write settings file");
        Self { root, settings_path }
    }

    /// Temporary root directory.
    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path of the settings file passed through `VHOSTGEN_CONFIG`.
    pub(crate) fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Build a command for invoking the compiled `vhostgen` binary.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("vhostgen").expect("Failed to locate vhostgen binary");
        cmd.current_dir(self.root())
            .env("VHOSTGEN_CONFIG", &self.settings_path)
            .env_remove("RUST_LOG");
        cmd
    }

    /// Directory used as the install target.
    pub(crate) fn vhost_dir(&self) -> PathBuf {
        self.root().join("sites-available")
    }

    /// Document root inside the temp directory for `server_name`.
    pub(crate) fn document_root(&self, server_name: &str) -> PathBuf {
        self.root().join("www").join(server_name).join("httpdocs")
    }

    /// Read an installed virtual host file.
    pub(crate) fn read_site(&self, server_name: &str) -> String {
        fs::read_to_string(self.vhost_dir().join(format!("{}.conf", server_name)))
            .expect("Failed to read installed virtual host")
    }

    /// Run `render` with `args` and return stdout.
    pub(crate) fn render(&self, args: &[&str]) -> String {
        let output = self.cli().arg("render").args(args).output().expect("Failed to run render");
        assert!(
            output.status.success(),
            "render failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("render output is not UTF-8")
    }
}
