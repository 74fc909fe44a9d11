//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A test component directory holding metadata and registry fixtures
pub struct TestComponent {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestComponent {
  /// Create an empty fixture directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Write the component metadata file and return its path
  pub fn write_meta(&self, json: &str) -> Result<PathBuf> {
    let path = self.path.join("component.json");
    std::fs::write(&path, json)?;
    Ok(path)
  }

  /// Write a captured registry document and return its path
  pub fn write_registry(&self, json: &str) -> Result<PathBuf> {
    let path = self.path.join("registry.json");
    std::fs::write(&path, json)?;
    Ok(path)
  }
}

/// Run the release-lens CLI, bailing on a non-zero exit
pub fn run_release_lens(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = release_lens_command(cwd, args).output().context("Failed to run release-lens")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "release-lens command failed: release-lens {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Build a release-lens command without running it (for failure-path tests)
pub fn release_lens_command(cwd: &Path, args: &[&str]) -> Command {
  let bin = env!("CARGO_BIN_EXE_release-lens");
  let mut command = Command::new(bin);
  command.current_dir(cwd).args(args);
  command
}
