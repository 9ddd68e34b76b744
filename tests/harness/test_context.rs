//! Shared testing harness for `playrun` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::FakeAnsible;

/// Isolated private data directory wired to fake ansible binaries.
pub(crate) struct TestContext {
    root: TempDir,
    base_dir: PathBuf,
    fake: FakeAnsible,
}

impl TestContext {
    /// Create `project/` and `inventory/` under a fresh base directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base_dir = root.path().join("base");
        fs::create_dir_all(base_dir.join("project")).expect("Failed to create project dir");
        fs::create_dir_all(base_dir.join("inventory")).expect("Failed to create inventory dir");

        let fake = FakeAnsible::new(&root.path().join("fake"));
        let ctx = Self { root, base_dir, fake };
        ctx.write_config("", "");
        ctx
    }

    pub(crate) fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub(crate) fn fake(&self) -> &FakeAnsible {
        &self.fake
    }

    /// Write `playrun.toml` pointing at the fake binaries.
    ///
    /// `runner_keys` are appended to `[runner]`; `sections` follow as-is.
    pub(crate) fn write_config(&self, runner_keys: &str, sections: &str) {
        let content = format!(
            "[runner]\nbinary = \"{}\"\ninventory_binary = \"{}\"\n{}\n\n{}\n",
            self.fake.runner_path().display(),
            self.fake.inventory_path().display(),
            runner_keys,
            sections,
        );
        fs::write(self.base_dir.join("playrun.toml"), content).expect("Failed to write config");
    }

    pub(crate) fn write_playbook(&self, name: &str, content: &str) -> PathBuf {
        let path = self.base_dir.join("project").join(name);
        fs::write(&path, content).expect("Failed to write playbook");
        path
    }

    pub(crate) fn write_inventory(&self, name: &str, content: &str) -> PathBuf {
        let path = self.base_dir.join("inventory").join(name);
        fs::write(&path, content).expect("Failed to write inventory");
        path
    }

    pub(crate) fn read_inventory(&self, name: &str) -> String {
        fs::read_to_string(self.base_dir.join("inventory").join(name))
            .expect("Failed to read inventory")
    }

    pub(crate) fn artifact_dir(&self) -> PathBuf {
        self.base_dir.join("artifact")
    }

    /// Build a command for the compiled `playrun` binary run from the base directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("playrun").expect("Failed to locate playrun binary");
        cmd.current_dir(&self.base_dir).env("HOME", self.root.path()).env_remove("PLAYRUN_FAKE_RC");
        cmd
    }
}
