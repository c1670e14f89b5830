//! Add command implementation
//!
//! Writes one date-stamped change file describing a pending change. The
//! timestamp in the file name is what later drives ordering during apply.

use crate::change::{ChangePayload, Severity};
use crate::core::config::Settings;
use crate::core::error::{ResultExt, ShipError, ShipResult};
use crate::core::vcs::SystemGit;
use chrono::Utc;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Run the add command
pub fn run_add(
  kind: String,
  comment: String,
  author: Option<String>,
  issues: Vec<String>,
  location: Option<PathBuf>,
) -> ShipResult<()> {
  let root = env::current_dir()?;
  let settings = Settings::resolve(&root, location, None, None, None)?;

  let severity = Severity::from_str(&kind).ok_or_else(|| {
    ShipError::with_help(
      format!("Unknown change type '{}'", kind),
      "Use one of: major, minor, patch, none.",
    )
  })?;

  let author = match author {
    Some(author) => author,
    None => SystemGit::open(&root)
      .ok()
      .and_then(|repo| repo.config_value("user.name").ok().flatten())
      .ok_or_else(|| {
        ShipError::with_help(
          "No author given and git config user.name is not set",
          "Pass --author or configure git: git config user.name \"Your Name\"",
        )
      })?,
  };

  let payload = ChangePayload {
    severity,
    comment,
    author,
    issue_links: if issues.is_empty() { None } else { Some(issues) },
  };

  let dir = root.join(&settings.change_dir);
  fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

  let stamp = Utc::now().format("%Y-%m-%d-%H-%M-%S");
  let mut path = dir.join(format!("change-{}.json", stamp));
  let mut counter = 1;
  while path.exists() {
    counter += 1;
    path = dir.join(format!("change-{}-{}.json", stamp, counter));
  }

  let mut content = serde_json::to_string_pretty(&payload)?;
  content.push('\n');
  fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

  println!("📝 Created {}", path.strip_prefix(&root).unwrap_or(&path).display());

  Ok(())
}
