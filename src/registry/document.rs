//! Registry document model
//!
//! Shaped like the response of `GET https://registry.npmjs.org/<packageName>`.
//! Every field defaults to empty: the release view renders from whatever the
//! document carries, and a dist-tag pointing at an unknown version id simply
//! yields an entry with no version or date.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LensError, LensResult, RegistryError};

/// A registry response for a single package
///
/// `dist_tags` is a BTreeMap so candidate iteration order (and therefore the
/// release view) is deterministic for identical documents.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryDocument {
  /// Tag name -> version id (e.g. "latest" -> "2.0.0")
  #[serde(default, rename = "dist-tags")]
  pub dist_tags: BTreeMap<String, String>,

  /// Version id -> version record
  #[serde(default)]
  pub versions: HashMap<String, VersionRecord>,

  /// Version id -> ISO-8601 publish timestamp
  ///
  /// npm also keys "created" and "modified" entries here; lookups are by
  /// version id only, so they are carried but never read.
  #[serde(default)]
  pub time: HashMap<String, String>,
}

/// A single published version record (minimal fields we care about)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VersionRecord {
  #[serde(default)]
  pub version: Option<String>,
}

impl RegistryDocument {
  /// Load a registry document captured to disk
  pub fn load(path: &Path) -> LensResult<Self> {
    let content = std::fs::read_to_string(path).map_err(|_| {
      LensError::Registry(RegistryError::NotFound {
        path: path.to_path_buf(),
      })
    })?;

    serde_json::from_str(&content).map_err(|e| {
      LensError::Registry(RegistryError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
      })
    })
  }

  /// Resolve a dist-tag to its version id
  pub fn resolve(&self, tag: &str) -> Option<&str> {
    self.dist_tags.get(tag).map(String::as_str)
  }

  /// Version string recorded for a version id
  pub fn version_of(&self, id: &str) -> Option<&str> {
    self.versions.get(id)?.version.as_deref()
  }

  /// Publish timestamp recorded for a version id
  pub fn published_at(&self, id: &str) -> Option<&str> {
    self.time.get(id).map(String::as_str)
  }
}
