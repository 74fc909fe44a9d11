//! Integration tests for `release-lens details`

use crate::helpers::{TestComponent, release_lens_command, run_release_lens};
use anyhow::Result;

const REGISTRY: &str = r#"{
  "dist-tags": {"latest": "2.0.0", "next": "2.1.0-next.0"},
  "versions": {
    "2.0.0": {"version": "2.0.0"},
    "2.1.0-next.0": {"version": "2.1.0-next.0"}
  },
  "time": {
    "2.0.0": "2024-01-05T12:00:00.000Z",
    "2.1.0-next.0": "2024-03-10T12:00:00.000Z"
  }
}"#;

#[test]
fn test_details_shows_local_when_ahead() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(r#"{"packageJson": {"name": "@spectrum-css/progressbar", "version": "2.1.0"}}"#)?;
  let registry = fixture.write_registry(REGISTRY)?;

  let output = run_release_lens(
    &fixture.path,
    &[
      "details",
      "--meta",
      meta.to_str().unwrap(),
      "--registry",
      registry.to_str().unwrap(),
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Local version"), "Should show the local entry, got: {}", stdout);
  assert!(stdout.contains("2.1.0"));
  assert!(stdout.contains("unpublished"));

  Ok(())
}

#[test]
fn test_details_falls_back_to_latest_when_behind() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(r#"{"packageJson": {"name": "@spectrum-css/progressbar", "version": "1.9.0"}}"#)?;
  let registry = fixture.write_registry(REGISTRY)?;

  let output = run_release_lens(
    &fixture.path,
    &[
      "details",
      "--meta",
      meta.to_str().unwrap(),
      "--registry",
      registry.to_str().unwrap(),
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Latest version"), "Local 1.9.0 is behind 2.0.0, got: {}", stdout);
  assert!(stdout.contains("2.0.0"));
  assert!(stdout.contains("published Jan 05, 2024"));

  Ok(())
}

#[test]
fn test_details_reports_deprecated_status() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(
    r#"{"packageJson": {"name": "@spectrum-css/progressbar", "version": "1.9.0"}, "status": {"type": "deprecated"}}"#,
  )?;
  let registry = fixture.write_registry(REGISTRY)?;

  let output = run_release_lens(
    &fixture.path,
    &[
      "details",
      "--meta",
      meta.to_str().unwrap(),
      "--registry",
      registry.to_str().unwrap(),
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("Status: Deprecated"));
  assert!(stdout.contains("Deprecated; no longer maintained."));

  Ok(())
}

#[test]
fn test_details_json_output() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(r#"{"packageJson": {"name": "@spectrum-css/progressbar", "version": "1.9.0"}}"#)?;
  let registry = fixture.write_registry(REGISTRY)?;

  let output = run_release_lens(
    &fixture.path,
    &[
      "details",
      "--meta",
      meta.to_str().unwrap(),
      "--registry",
      registry.to_str().unwrap(),
      "--json",
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");
  assert_eq!(json["package"], "@spectrum-css/progressbar");
  assert_eq!(json["shown"], "latest");
  assert_eq!(json["entry"]["version"], "2.0.0");
  assert_eq!(json["status"]["variant"], "positive");

  Ok(())
}

#[test]
fn test_details_degrades_without_registry() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(r#"{"packageJson": {"name": "@spectrum-css/progressbar", "version": "1.0.0"}}"#)?;

  // No --registry at all: the local entry is all there is
  let output = run_release_lens(&fixture.path, &["details", "--meta", meta.to_str().unwrap()])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("Local version"));

  // A missing registry file warns on stderr but still succeeds
  let output = run_release_lens(
    &fixture.path,
    &[
      "details",
      "--meta",
      meta.to_str().unwrap(),
      "--registry",
      "missing.json",
    ],
  )?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stdout.contains("Local version"));
  assert!(stderr.contains("Registry document not found"), "got: {}", stderr);

  Ok(())
}

#[test]
fn test_details_without_package_name() -> Result<()> {
  let fixture = TestComponent::new()?;
  let meta = fixture.write_meta(r#"{"componentVersion": "0.1.0"}"#)?;

  let output = run_release_lens(&fixture.path, &["details", "--meta", meta.to_str().unwrap()])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  assert!(stdout.contains("No package metadata available"));

  Ok(())
}

#[test]
fn test_details_missing_meta_is_a_user_error() -> Result<()> {
  let fixture = TestComponent::new()?;

  let output = release_lens_command(&fixture.path, &["details", "--meta", "missing.json"]).output()?;
  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1), "Missing metadata is a user error");

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("Component metadata file not found"));

  Ok(())
}
