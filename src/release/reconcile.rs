//! Release metadata reconciliation
//!
//! Reshapes a registry document plus component metadata into the release
//! view the documentation renders: one entry per dist-tag, a synthetic
//! `local` entry for the working copy, deterministic ordering, and
//! suppression of the local entry once the published `latest` release has
//! caught up with it.
//!
//! Reconciliation cannot fail. Every lookup chain degrades to an absent
//! value; a dist-tag pointing at an unknown version id still yields an
//! entry, just without a version or date.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::npm::component::ComponentMeta;
use crate::registry::document::RegistryDocument;
use crate::release::semver::{TripleOrdering, compare_triples};

/// Synthetic tag for the unpublished working copy
pub const LOCAL_TAG: &str = "local";

/// The registry's primary release tag
pub const LATEST_TAG: &str = "latest";

/// npm package page prefix for version links
const PACKAGE_URL: &str = "https://www.npmjs.org/package/";

/// One reconciled version entry, keyed by its dist-tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionEntry {
  /// Dist-tag name, or `local` for the synthetic entry
  pub tag: String,

  /// Version string, when resolvable
  pub version: Option<String>,

  /// Display form: `published <Mon DD, YYYY>`, or `unpublished` for local
  pub published: Option<String>,

  /// Parsed publish timestamp; drives sorting, absent sorts as earliest
  pub published_at: Option<DateTime<Utc>>,

  /// npm package page for the resolved version; never set for local
  pub link: Option<String>,
}

impl VersionEntry {
  /// Whether this is the synthetic local entry
  pub fn is_local(&self) -> bool {
    self.tag == LOCAL_TAG
  }
}

/// The reconciled, display-ready release view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseView {
  /// True iff a local entry survived suppression
  pub show_local_version: bool,

  /// All entries, sorted: local, latest, then publish date descending
  pub all_versions: Vec<VersionEntry>,
}

impl ReleaseView {
  /// Entry for a tag, if present
  pub fn entry(&self, tag: &str) -> Option<&VersionEntry> {
    self.all_versions.iter().find(|e| e.tag == tag)
  }

  /// The synthetic local entry, if it survived suppression
  pub fn local(&self) -> Option<&VersionEntry> {
    self.entry(LOCAL_TAG)
  }

  /// The latest published entry, if any
  pub fn latest(&self) -> Option<&VersionEntry> {
    self.entry(LATEST_TAG)
  }

  /// Every published entry (the local one excluded)
  pub fn tagged_releases(&self) -> impl Iterator<Item = &VersionEntry> {
    self.all_versions.iter().filter(|e| !e.is_local())
  }
}

/// Reconcile component metadata with a registry document
///
/// Both inputs may be as partial as `Default::default()`; missing data
/// narrows the view instead of failing it.
pub fn reconcile(meta: &ComponentMeta, registry: &RegistryDocument) -> ReleaseView {
  let mut entries = Vec::with_capacity(registry.dist_tags.len() + 1);

  // Candidates: the synthetic local tag first, then the registry's
  // dist-tags in document order, minus ignored tags. Tag is the unique
  // key, so a registry that carries its own "local" dist-tag does not
  // add a second entry.
  if !meta.is_ignored(LOCAL_TAG) {
    entries.push(build_entry(LOCAL_TAG, meta, registry));
  }
  for tag in registry.dist_tags.keys() {
    if tag != LOCAL_TAG && !meta.is_ignored(tag) {
      entries.push(build_entry(tag, meta, registry));
    }
  }

  // local first, latest next, the rest by publish date descending with
  // undated entries last. The sort is stable, so equal keys keep the
  // candidate order and the view is deterministic.
  entries.sort_by(|a, b| {
    tag_rank(&a.tag)
      .cmp(&tag_rank(&b.tag))
      .then_with(|| b.published_at.cmp(&a.published_at))
  });

  suppress_stale_local(&mut entries);

  let show_local_version = entries.first().is_some_and(VersionEntry::is_local);

  ReleaseView {
    show_local_version,
    all_versions: entries,
  }
}

fn build_entry(tag: &str, meta: &ComponentMeta, registry: &RegistryDocument) -> VersionEntry {
  if tag == LOCAL_TAG {
    // The working copy: version from package.json (or the story fallback),
    // never dated, never linked.
    return VersionEntry {
      tag: LOCAL_TAG.to_string(),
      version: meta.version_fallback().map(str::to_string),
      published: Some("unpublished".to_string()),
      published_at: None,
      link: None,
    };
  }

  let resolved = registry.resolve(tag);
  let version = resolved.and_then(|id| registry.version_of(id)).map(str::to_string);

  let published_at = resolved
    .and_then(|id| registry.published_at(id))
    .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
    .map(|d| d.with_timezone(&Utc));
  let published = published_at.map(|d| format!("published {}", d.format("%b %d, %Y")));

  let link = match (meta.package_name(), resolved) {
    (Some(name), Some(id)) => Some(format!("{}{}/v/{}", PACKAGE_URL, name, id)),
    _ => None,
  };

  VersionEntry {
    tag: tag.to_string(),
    version,
    published,
    published_at,
    link,
  }
}

fn tag_rank(tag: &str) -> u8 {
  match tag {
    LOCAL_TAG => 0,
    LATEST_TAG => 1,
    _ => 2,
  }
}

/// Drop the local entry when the published latest release has caught up:
/// identical version strings, or local strictly behind as a numeric triple.
/// Ahead and inconclusive comparisons keep it.
fn suppress_stale_local(entries: &mut Vec<VersionEntry>) {
  let Some(local_idx) = entries.iter().position(VersionEntry::is_local) else {
    return;
  };
  let Some(latest) = entries.iter().find(|e| e.tag == LATEST_TAG) else {
    return;
  };

  let (Some(local_version), Some(latest_version)) = (&entries[local_idx].version, &latest.version) else {
    return;
  };

  let stale = local_version == latest_version
    || compare_triples(local_version, latest_version) == TripleOrdering::Behind;

  if stale {
    entries.remove(local_idx);
  }
}
