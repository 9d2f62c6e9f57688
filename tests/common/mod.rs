//! Shared testing utilities for stackup CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated stack root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment. The work directory doubles as the
    /// stack root, so its name becomes the default domain.
    pub fn new() -> Self {
        Self::with_stack_name("acme")
    }

    /// Create an isolated environment with a named stack root directory.
    pub fn with_stack_name(name: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join(name);
        fs::create_dir_all(&work_dir).expect("Failed to create test stack root");
        Self { root, work_dir }
    }

    /// Path to the stack root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stackup` binary within the stack root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("stackup").expect("Failed to locate stackup binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to the backend env file.
    pub fn backend_env(&self) -> PathBuf {
        self.work_dir.join("backend/.env")
    }

    /// Path to the frontend env file.
    pub fn frontend_env(&self) -> PathBuf {
        self.work_dir.join("frontend/.env.local")
    }
}
