//! Details command: the component's current release

use std::path::Path;

use serde::Serialize;

use crate::commands::load_inputs;
use crate::core::error::{LensError, LensResult};
use crate::release::reconcile::{VersionEntry, reconcile};
use crate::release::status::{Status, status_for};

/// What the details report shows, ready for JSON output
#[derive(Serialize)]
struct DetailsReport<'a> {
  package: Option<&'a str>,
  deprecated: bool,
  /// Which entry is being shown: "local" or "latest"
  shown: Option<&'a str>,
  entry: Option<&'a VersionEntry>,
  status: Option<Status>,
}

/// Run the details command
pub fn run_details(meta_path: &Path, registry_path: Option<&Path>, json: bool) -> LensResult<()> {
  let (meta, registry) = load_inputs(meta_path, registry_path)?;
  let deprecated = meta.is_deprecated();

  // Without a package name there is nothing to look up or link to
  let Some(package) = meta.package_name() else {
    if json {
      let report = DetailsReport {
        package: None,
        deprecated,
        shown: None,
        entry: None,
        status: None,
      };
      println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
      println!("No package metadata available for this component.");
    }
    return Ok(());
  };

  let view = reconcile(&meta, &registry);

  // Prefer the local entry while it is still ahead of the registry,
  // otherwise fall back to the latest published release
  let (shown, entry) = if view.show_local_version {
    ("local", view.local())
  } else {
    ("latest", view.latest())
  };
  let status = entry.map(|e| status_for(e, deprecated));

  if json {
    let report = DetailsReport {
      package: Some(package),
      deprecated,
      shown: entry.map(|_| shown),
      entry,
      status,
    };
    println!(
      "{}",
      serde_json::to_string_pretty(&report).map_err(|e| LensError::message(format!("Failed to serialize JSON: {}", e)))?
    );
    return Ok(());
  }

  println!("📦 {}\n", package);

  if deprecated {
    println!("Status: Deprecated");
  }

  match (entry, status) {
    (Some(entry), Some(status)) => {
      let label = if entry.is_local() { "Local version" } else { "Latest version" };
      let version = entry.version.as_deref().unwrap_or("unknown");
      let published = entry.published.as_deref().unwrap_or("");

      println!("{}: {} {} {}", label, status.variant.light(), version, published);
      println!("   {}", status.message);
    }
    _ => {
      println!("No release information available.");
    }
  }

  Ok(())
}
