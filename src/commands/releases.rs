//! Releases command: every tagged release on the registry

use std::path::Path;

use serde::Serialize;

use crate::commands::load_inputs;
use crate::core::error::{LensError, LensResult};
use crate::release::reconcile::reconcile;
use crate::release::status::{Status, status_for};

/// One row of the tagged releases listing, ready for JSON output
#[derive(Serialize)]
struct ReleaseRow<'a> {
  tag: &'a str,
  version: Option<&'a str>,
  published: Option<&'a str>,
  link: Option<&'a str>,
  status: Status,
}

/// Run the releases command
pub fn run_releases(meta_path: &Path, registry_path: Option<&Path>, json: bool) -> LensResult<()> {
  let (meta, registry) = load_inputs(meta_path, registry_path)?;
  let deprecated = meta.is_deprecated();

  let view = reconcile(&meta, &registry);

  let rows: Vec<ReleaseRow<'_>> = view
    .tagged_releases()
    .map(|entry| ReleaseRow {
      tag: &entry.tag,
      version: entry.version.as_deref(),
      published: entry.published.as_deref(),
      link: entry.link.as_deref(),
      status: status_for(entry, deprecated),
    })
    .collect();

  if json {
    println!(
      "{}",
      serde_json::to_string_pretty(&rows).map_err(|e| LensError::message(format!("Failed to serialize JSON: {}", e)))?
    );
    return Ok(());
  }

  match meta.package_name() {
    Some(package) => println!("📦 Tagged releases for {}\n", package),
    None => println!("📦 Tagged releases\n"),
  }

  if rows.is_empty() {
    println!("No tagged releases found on the registry.");
    return Ok(());
  }

  for row in &rows {
    println!(
      "  {:<12} {} {:<18} {}",
      row.tag,
      row.status.variant.light(),
      row.version.unwrap_or("unknown"),
      row.published.unwrap_or("")
    );
    if let Some(link) = row.link {
      println!("  {:<12}    {}", "", link);
    }
    println!("     {}", row.status.message);
    println!();
  }

  Ok(())
}
