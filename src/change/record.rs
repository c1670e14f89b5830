//! Change records and the severity ranking
//!
//! A change file is one pending release note: a severity, a free-text
//! comment, an author, and optional issue links. The file name carries an
//! optional timestamp that drives ordering during aggregation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity of a single change, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  /// Breaking change
  Major,
  /// New functionality, backwards compatible
  Minor,
  /// Bug fix, backwards compatible
  Patch,
  /// No release-relevant change
  None,
}

impl Severity {
  /// Rank table defining the total order. Higher rank wins.
  fn rank(self) -> u8 {
    match self {
      Severity::Major => 3,
      Severity::Minor => 2,
      Severity::Patch => 1,
      Severity::None => 0,
    }
  }

  /// Parse a severity from its lowercase name
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "major" => Some(Severity::Major),
      "minor" => Some(Severity::Minor),
      "patch" => Some(Severity::Patch),
      "none" => Some(Severity::None),
      _ => None,
    }
  }

  /// Lowercase name, as stored in change files
  pub fn as_str(self) -> &'static str {
    match self {
      Severity::Major => "major",
      Severity::Minor => "minor",
      Severity::Patch => "patch",
      Severity::None => "none",
    }
  }
}

impl Ord for Severity {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.rank().cmp(&other.rank())
  }
}

impl PartialOrd for Severity {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// On-disk payload of a change file
///
/// Field names match the JSON written by `changeship add`:
///
/// ```json
/// {
///   "type": "minor",
///   "comment": "Add feature",
///   "author": "Author1",
///   "issueLinks": ["#123"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePayload {
  #[serde(rename = "type")]
  pub severity: Severity,
  pub comment: String,
  pub author: String,
  #[serde(rename = "issueLinks", default, skip_serializing_if = "Option::is_none")]
  pub issue_links: Option<Vec<String>>,
}

/// A loaded change record: payload plus its source handle and timestamp
///
/// The timestamp is extracted from the file name exactly once, at load time,
/// and reused for both sorting and the max-date computation.
#[derive(Debug, Clone)]
pub struct ChangeRecord {
  /// Path of the change file; used to delete it after a successful apply
  pub source: PathBuf,
  /// Timestamp parsed from the file name, if the name carries one
  pub timestamp: Option<DateTime<Utc>>,
  pub payload: ChangePayload,
}
