//! Accumulation of pending change records into a single release decision
//!
//! Pure, in-memory merge: given every pending record and the current base
//! version, derive the highest severity, the combined comment, the distinct
//! author and issue-link lists, the effective date, and the bumped version.
//! All side effects (changelog write, file deletion, git) belong to the
//! caller and happen only after this succeeds.

use crate::change::record::{ChangeRecord, Severity};
use crate::change::version::VersionOracle;
use crate::core::error::{ShipError, ShipResult};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;

/// The merged result of all pending change records
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseDecision {
  /// Next version computed from the base version and the highest severity
  pub bumped_version: String,
  /// Latest timestamp among dated records, or "now" when none is dated
  pub effective_date: DateTime<Utc>,
  /// Maximum severity across all records
  pub severity: Severity,
  /// All comments, newest first, joined with a blank line
  pub comment: String,
  /// Distinct authors in first-seen order, joined with ", "
  pub author: String,
  /// Distinct issue links in first-seen order; `None` when no record has any
  pub issue_links: Option<Vec<String>>,
}

/// Merge all pending records into one release decision
///
/// Sorts `records` in place by descending timestamp (undated records last,
/// keeping their relative enumeration order); that single ordering drives
/// comment order and the first-seen order of authors and issue links, and is
/// left in place so the caller consumes the records in the same order.
///
/// Returns `Ok(None)` for an empty record set: nothing to release is the
/// steady state, not an error. Returns an error when the oracle cannot
/// compute a next version; nothing has been mutated at that point.
pub fn aggregate(
  records: &mut [ChangeRecord],
  base_version: &str,
  oracle: &dyn VersionOracle,
  now: DateTime<Utc>,
) -> ShipResult<Option<ReleaseDecision>> {
  if records.is_empty() {
    return Ok(None);
  }

  // Stable sort: equal keys (including undated vs. undated) keep their
  // original enumeration order.
  records.sort_by(|a, b| match (a.timestamp, b.timestamp) {
    (Some(a_ts), Some(b_ts)) => b_ts.cmp(&a_ts),
    (Some(_), None) => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (None, None) => Ordering::Equal,
  });

  let severity = records
    .iter()
    .map(|r| r.payload.severity)
    .max()
    .unwrap_or(Severity::None);

  let effective_date = records.iter().filter_map(|r| r.timestamp).max().unwrap_or(now);

  let comment = records
    .iter()
    .map(|r| r.payload.comment.as_str())
    .collect::<Vec<_>>()
    .join("\n\n");

  let mut seen_authors = HashSet::new();
  let mut authors = Vec::new();
  for record in records.iter() {
    if seen_authors.insert(record.payload.author.as_str()) {
      authors.push(record.payload.author.clone());
    }
  }

  let mut seen_links = HashSet::new();
  let mut issue_links = Vec::new();
  for record in records.iter() {
    for link in record.payload.issue_links.iter().flatten() {
      if seen_links.insert(link.as_str()) {
        issue_links.push(link.clone());
      }
    }
  }

  let bumped_version = oracle.bump(base_version, severity).ok_or_else(|| {
    ShipError::with_help(
      format!("Cannot bump version {} with severity {}", base_version, severity),
      "The base version must be valid semver and at least one change file must carry a real severity.",
    )
  })?;

  Ok(Some(ReleaseDecision {
    bumped_version,
    effective_date,
    severity,
    comment,
    author: authors.join(", "),
    issue_links: if issue_links.is_empty() { None } else { Some(issue_links) },
  }))
}
