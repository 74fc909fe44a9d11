//! Component story parameters
//!
//! The shape mirrors what a component's documentation stories carry in their
//! parameters block: the component's package.json, a version fallback for
//! unpublished components, dist-tags to hide, and an optional lifecycle status.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LensError, LensResult, MetaError};
use crate::npm::package::PackageJson;

/// Component metadata supplied alongside the stories
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
  /// The component's package.json contents
  #[serde(default)]
  pub package_json: Option<PackageJson>,

  /// Fallback version used when package.json carries no version
  #[serde(default)]
  pub component_version: Option<String>,

  /// Dist-tags to exclude from the release view
  #[serde(default)]
  pub ignored_tags: Vec<String>,

  /// Lifecycle status (e.g. deprecated)
  #[serde(default)]
  pub status: Option<ComponentStatus>,
}

/// Lifecycle status block from the story parameters
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ComponentStatus {
  #[serde(default, rename = "type")]
  pub kind: Option<String>,
}

impl ComponentMeta {
  /// Load component metadata from a JSON parameters file
  pub fn load(path: &Path) -> LensResult<Self> {
    let content = std::fs::read_to_string(path).map_err(|_| {
      LensError::Meta(MetaError::NotFound {
        path: path.to_path_buf(),
      })
    })?;

    serde_json::from_str(&content).map_err(|e| {
      LensError::Meta(MetaError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
      })
    })
  }

  /// The npm package name, when known
  pub fn package_name(&self) -> Option<&str> {
    self.package_json.as_ref()?.name.as_deref()
  }

  /// Version for the synthetic local entry: package.json first, then the
  /// story-level fallback
  pub fn version_fallback(&self) -> Option<&str> {
    self
      .package_json
      .as_ref()
      .and_then(|p| p.version.as_deref())
      .or(self.component_version.as_deref())
  }

  /// Whether the component is marked deprecated
  pub fn is_deprecated(&self) -> bool {
    self
      .status
      .as_ref()
      .and_then(|s| s.kind.as_deref())
      .is_some_and(|kind| kind == "deprecated")
  }

  /// Whether a dist-tag is excluded from the release view
  pub fn is_ignored(&self, tag: &str) -> bool {
    self.ignored_tags.iter().any(|t| t == tag)
  }
}
