//! Minimal package.json model

use serde::{Deserialize, Serialize};

/// package.json structure (minimal fields we care about)
///
/// Every field is optional: a partially filled manifest must never prevent
/// the release view from rendering.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageJson {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub version: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}
