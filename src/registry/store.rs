//! Registry source and cache collaborators
//!
//! The tool never performs HTTP itself; a `RegistrySource` hands it a
//! document, and a `MetadataCache` remembers documents across fetches keyed
//! by package name. `MetadataStore` wires the two together read-through:
//! cache hit wins, a miss (or an entry that no longer deserializes) falls
//! back to the source and the result is written back.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use crate::core::error::LensResult;
use crate::registry::document::RegistryDocument;

/// Supplies registry documents for a package
pub trait RegistrySource {
  fn fetch(&self, package: &str) -> LensResult<RegistryDocument>;
}

/// Remembers raw registry JSON keyed by package name
pub trait MetadataCache {
  fn get(&self, key: &str) -> Option<Value>;
  fn set(&self, key: &str, value: Value);
}

/// Registry document captured to disk
///
/// Transport is external tooling:
/// `curl https://registry.npmjs.org/<name> > registry.json`. The requested
/// package name is ignored; the file is the document.
pub struct FileSource {
  path: PathBuf,
}

impl FileSource {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl RegistrySource for FileSource {
  fn fetch(&self, _package: &str) -> LensResult<RegistryDocument> {
    RegistryDocument::load(&self.path)
  }
}

/// In-memory cache, suitable for a single run or embedding in a longer-lived
/// host that owns persistence itself
#[derive(Default)]
pub struct MemoryCache {
  entries: Mutex<HashMap<String, Value>>,
}

impl MemoryCache {
  pub fn new() -> Self {
    Self::default()
  }
}

impl MetadataCache for MemoryCache {
  fn get(&self, key: &str) -> Option<Value> {
    let entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    entries.get(key).cloned()
  }

  fn set(&self, key: &str, value: Value) {
    let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    entries.insert(key.to_string(), value);
  }
}

/// Read-through store over a source and a cache
pub struct MetadataStore<S, C> {
  source: S,
  cache: C,
}

impl<S: RegistrySource, C: MetadataCache> MetadataStore<S, C> {
  pub fn new(source: S, cache: C) -> Self {
    Self { source, cache }
  }

  /// Get the registry document for a package
  ///
  /// A cached entry that fails to deserialize is treated as a miss; fetch
  /// errors propagate to the caller, which decides whether to degrade.
  pub fn document(&self, package: &str) -> LensResult<RegistryDocument> {
    if let Some(value) = self.cache.get(package)
      && let Ok(doc) = serde_json::from_value::<RegistryDocument>(value)
    {
      return Ok(doc);
    }

    let doc = self.source.fetch(package)?;
    if let Ok(value) = serde_json::to_value(&doc) {
      self.cache.set(package, value);
    }
    Ok(doc)
  }
}
