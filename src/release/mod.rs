//! Release metadata reconciliation
//!
//! # Core Invariants
//!
//! 1. **The local entry is synthetic**
//!    - Always a candidate unless explicitly ignored
//!    - Never resolved from the registry, never linked
//!    - Suppressed when the latest published release has caught up with it
//!
//! 2. **Exactly one entry per tag**
//!    - Tag is the unique key; a registry that carries a `local` dist-tag
//!      still yields a single, special-cased entry
//!
//! 3. **Ordering is deterministic**
//!    - local first, latest next, the rest by publish date descending
//!    - Undated entries sort as earliest; ties keep candidate order
//!
//! # Architecture
//!
//! - **reconcile**: The pure reconciliation function and its view types
//! - **semver**: Lenient three-component version comparison
//! - **status**: Entry -> display status variant mapping

pub mod reconcile;
pub mod semver;
pub mod status;

pub use reconcile::{LATEST_TAG, LOCAL_TAG, ReleaseView, VersionEntry, reconcile};
