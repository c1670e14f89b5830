//! Change-file storage: enumerate, load, and delete pending change files
//!
//! Change files live in a flat directory (default `.changes/`) as JSON
//! documents. The file name optionally embeds a timestamp
//! (`change-2024-03-01-12-30-00.json`); names without a parseable date are
//! still valid records, they just sort after all dated ones.

use crate::change::record::{ChangePayload, ChangeRecord};
use crate::core::error::{ConfigError, ResultExt, ShipError, ShipResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage capability consumed by the apply pipeline
pub trait ChangeStore {
  /// Enumerate pending change files, in stable (lexicographic) order
  fn list(&self) -> ShipResult<Vec<PathBuf>>;

  /// Load one change file; the timestamp is extracted here, exactly once
  fn read(&self, source: &Path) -> ShipResult<ChangeRecord>;

  /// Remove a consumed change file
  fn delete(&self, source: &Path) -> ShipResult<()>;
}

/// Filesystem-backed change store
pub struct FsChangeStore {
  dir: PathBuf,
}

impl FsChangeStore {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }
}

impl ChangeStore for FsChangeStore {
  fn list(&self) -> ShipResult<Vec<PathBuf>> {
    if !self.dir.exists() {
      return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(&self.dir).with_context(|| format!("Failed to read {}", self.dir.display()))? {
      let path = entry?.path();
      if path.extension().and_then(|e| e.to_str()) == Some("json") {
        paths.push(path);
      }
    }

    // Directory iteration order is platform-dependent; sort so the
    // enumeration order (which decides ties between undated records) is
    // stable across runs.
    paths.sort();
    Ok(paths)
  }

  fn read(&self, source: &Path) -> ShipResult<ChangeRecord> {
    let content =
      fs::read_to_string(source).with_context(|| format!("Failed to read change file {}", source.display()))?;

    let payload: ChangePayload = serde_json::from_str(&content).map_err(|e| {
      ShipError::Config(ConfigError::BadChangeFile {
        path: source.to_path_buf(),
        reason: e.to_string(),
      })
    })?;

    Ok(ChangeRecord {
      source: source.to_path_buf(),
      timestamp: timestamp_from_name(source),
      payload,
    })
  }

  fn delete(&self, source: &Path) -> ShipResult<()> {
    fs::remove_file(source).with_context(|| format!("Failed to delete change file {}", source.display()))
  }
}

/// Extract the timestamp embedded in a change-file name
///
/// Accepts a `YYYY-MM-DD-HH-MM-SS` segment anywhere in the file stem, or a
/// bare `YYYY-MM-DD` (midnight UTC). Returns `None` when the name carries no
/// parseable date.
pub fn timestamp_from_name(path: &Path) -> Option<DateTime<Utc>> {
  let stem = path.file_stem()?.to_str()?;
  let segments: Vec<&str> = stem.split('-').collect();

  for (i, seg) in segments.iter().enumerate() {
    if seg.len() != 4 || !seg.chars().all(|c| c.is_ascii_digit()) {
      continue;
    }

    if segments.len() >= i + 6 {
      let candidate = segments[i..i + 6].join("-");
      if let Ok(dt) = NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%d-%H-%M-%S") {
        return Some(dt.and_utc());
      }
    }

    if segments.len() >= i + 3 {
      let candidate = segments[i..i + 3].join("-");
      if let Ok(date) = NaiveDate::parse_from_str(&candidate, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
      }
    }
  }

  None
}
