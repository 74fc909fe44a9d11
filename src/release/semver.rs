//! Lenient three-component version comparison
//!
//! Compares version strings as `(major, minor, patch)` tuples. Pre-release
//! and build metadata are ignored on purpose: an unpublished `2.1.0` and a
//! published `2.1.0-next.0` count as the same release line here. Strings
//! that don't parse as full semver fall back to taking the leading decimal
//! digits of each dotted component; a component with none makes the
//! comparison inconclusive rather than wrong.

use std::cmp::Ordering;

/// Outcome of comparing two version strings as numeric triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripleOrdering {
  /// Left is strictly behind right at the first differing component
  Behind,
  /// All three components are equal
  Equal,
  /// Left is strictly ahead of right at the first differing component
  Ahead,
  /// A needed component was non-numeric or missing
  Inconclusive,
}

/// Compare two version strings component by component
///
/// Ties on major cascade to minor, ties on major+minor cascade to patch.
pub fn compare_triples(left: &str, right: &str) -> TripleOrdering {
  // Fast path: both sides are well-formed semver
  if let (Ok(l), Ok(r)) = (semver::Version::parse(left), semver::Version::parse(right)) {
    return match (l.major, l.minor, l.patch).cmp(&(r.major, r.minor, r.patch)) {
      Ordering::Less => TripleOrdering::Behind,
      Ordering::Equal => TripleOrdering::Equal,
      Ordering::Greater => TripleOrdering::Ahead,
    };
  }

  let l = components(left);
  let r = components(right);

  for i in 0..3 {
    match (l[i], r[i]) {
      (Some(a), Some(b)) if a < b => return TripleOrdering::Behind,
      (Some(a), Some(b)) if a > b => return TripleOrdering::Ahead,
      (Some(_), Some(_)) => {}
      _ => return TripleOrdering::Inconclusive,
    }
  }

  TripleOrdering::Equal
}

/// First three dotted components, reduced to their leading decimal digits
fn components(version: &str) -> [Option<u64>; 3] {
  let mut out = [None; 3];
  for (i, part) in version.split('.').take(3).enumerate() {
    out[i] = leading_number(part);
  }
  out
}

fn leading_number(part: &str) -> Option<u64> {
  let end = part.find(|c: char| !c.is_ascii_digit()).unwrap_or(part.len());
  if end == 0 {
    return None;
  }
  part[..end].parse().ok()
}
