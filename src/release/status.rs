//! Display status for a version entry
//!
//! Maps an entry to a status light plus message. The rules layer in order:
//! availability on the registry, deprecation, non-production tags, and the
//! local entry overriding everything.

use serde::Serialize;

use crate::release::reconcile::{LATEST_TAG, VersionEntry};

/// Status light variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusVariant {
  Positive,
  Negative,
  Notice,
}

impl StatusVariant {
  /// Terminal rendition of the status light
  pub fn light(self) -> &'static str {
    match self {
      StatusVariant::Positive => "🟢",
      StatusVariant::Negative => "🔴",
      StatusVariant::Notice => "🟡",
    }
  }
}

/// Status light plus its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
  pub variant: StatusVariant,
  pub message: &'static str,
}

/// Resolve the display status for an entry
pub fn status_for(entry: &VersionEntry, deprecated: bool) -> Status {
  let mut variant = StatusVariant::Notice;
  let mut message = "Not yet available on the npm registry.";

  if deprecated {
    variant = StatusVariant::Negative;
    message = "Deprecated; no longer maintained.";
  } else if entry.published_at.is_some() {
    variant = StatusVariant::Positive;
    message = "Available on the npm registry.";
  }

  if !deprecated && entry.tag != LATEST_TAG {
    variant = StatusVariant::Notice;
    message = "Available on the npm registry but not recommended for production use.";
  }

  if entry.is_local() {
    variant = StatusVariant::Negative;
    message = "Not yet published to the npm registry.";
  }

  Status { variant, message }
}
