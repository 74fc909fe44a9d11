//! CLI commands for release-lens
//!
//! - **details**: Show the component's current release (local or latest)
//! - **releases**: List every tagged release published to the registry
//!
//! Both commands read the component metadata file, pull the registry
//! document through the read-through store, and reconcile the two. A
//! registry that cannot be read is reported to stderr and the command
//! degrades to the empty document; reconciliation itself never fails.

pub mod details;
pub mod releases;

pub use details::run_details;
pub use releases::run_releases;

use std::path::Path;

use crate::core::error::LensResult;
use crate::npm::component::ComponentMeta;
use crate::registry::document::RegistryDocument;
use crate::registry::store::{FileSource, MemoryCache, MetadataStore};

/// Load the component metadata and its registry document
///
/// Metadata problems are hard errors; registry problems degrade.
pub(crate) fn load_inputs(meta_path: &Path, registry_path: Option<&Path>) -> LensResult<(ComponentMeta, RegistryDocument)> {
  let meta = ComponentMeta::load(meta_path)?;

  let registry = match registry_path {
    Some(path) => {
      let store = MetadataStore::new(FileSource::new(path), MemoryCache::new());
      match store.document(meta.package_name().unwrap_or_default()) {
        Ok(doc) => doc,
        Err(err) => {
          eprintln!("⚠️  {}", err);
          RegistryDocument::default()
        }
      }
    }
    None => RegistryDocument::default(),
  };

  Ok((meta, registry))
}
