//! Status command implementation
//!
//! Lists pending change files with their parsed timestamp and payload, so a
//! release can be reviewed before running apply.

use crate::change::{ChangeStore, FsChangeStore, Severity};
use crate::core::config::Settings;
use crate::core::error::ShipResult;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Summary of one pending change file
#[derive(Debug, Clone, Serialize)]
pub struct PendingChange {
  /// File name of the change file
  pub file: String,

  #[serde(rename = "type")]
  pub severity: Severity,

  pub author: String,

  pub comment: String,

  /// Timestamp parsed from the file name, `YYYY-MM-DD`
  pub date: Option<String>,
}

/// Run the status command
pub fn run_status(location: Option<PathBuf>, json: bool) -> ShipResult<()> {
  let root = env::current_dir()?;
  let settings = Settings::resolve(&root, location, None, None, None)?;

  let store = FsChangeStore::new(root.join(&settings.change_dir));

  let mut pending = Vec::new();
  for source in store.list()? {
    let record = store.read(&source)?;
    pending.push(PendingChange {
      file: source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default(),
      severity: record.payload.severity,
      author: record.payload.author,
      comment: record.payload.comment,
      date: record.timestamp.map(|ts| ts.format("%Y-%m-%d").to_string()),
    });
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&pending)?);
  } else {
    print_pending_table(&pending);
  }

  Ok(())
}

/// Print pending changes as a formatted table
fn print_pending_table(pending: &[PendingChange]) {
  if pending.is_empty() {
    println!("\n✅ No pending change files\n");
    return;
  }

  println!("\n📋 Pending Changes\n");
  println!("{:<42} {:<8} {:<12} {:<20} COMMENT", "FILE", "TYPE", "DATE", "AUTHOR");
  println!("{:-<110}", "");

  for change in pending {
    let first_line = change.comment.lines().next().unwrap_or("");
    println!(
      "{:<42} {:<8} {:<12} {:<20} {}",
      change.file,
      change.severity.as_str(),
      change.date.as_deref().unwrap_or("-"),
      change.author,
      first_line
    );
  }

  println!();
}
